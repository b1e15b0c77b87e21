use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Warnings only by default; `--verbose` adds this crate's debug events.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "book_tracker=debug,info"
    } else {
        "book_tracker=warn"
    }
}

/// Installs the console subscriber. Events go to stderr; stdout is reserved
/// for the result table and the statistics block. `RUST_LOG` overrides the
/// default directive.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
