use book_tracker::utils::logger;
use book_tracker::{CliConfig, LocalStorage, Tracker};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Failures are reported inside the run; the process always exits normally.
    let tracker = Tracker::new(LocalStorage::new(), config);
    tracker.run().await;
}
