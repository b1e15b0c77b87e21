use crate::config::{validate_run_target, RunTarget};
use crate::core::context::{failure_context, RunContext};
use crate::core::dispatch::{execute, Operation};
use crate::core::loader::load_catalog;
use crate::domain::model::{Catalog, OperationOutcome, RunStatistics};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, TrackerError};
use crate::utils::error_log::ErrorLog;
use crate::utils::table;
use std::future::Future;

/// Runs one invocation: validate arguments, load the catalog, perform the
/// requested operation, print the statistics.
pub struct Tracker<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fallback_log: ErrorLog,
}

impl<S: Storage, C: ConfigProvider> Tracker<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            fallback_log: ErrorLog::default(),
        }
    }

    /// Where failures are logged before the catalog location is known.
    pub fn with_fallback_log(mut self, error_log: ErrorLog) -> Self {
        self.fallback_log = error_log;
        self
    }

    /// Never fails: every error is recorded in the returned statistics, and
    /// the statistics block is printed on every path.
    pub async fn run(&self) -> RunStatistics {
        let mut ctx = RunContext::new(self.fallback_log.clone());
        self.run_with(&mut ctx).await;

        print!("{}", table::statistics(&ctx.stats));
        tracing::info!(
            valid = ctx.stats.valid_records,
            results = ctx.stats.search_results,
            added = ctx.stats.books_added,
            errors = ctx.stats.errors,
            "Run finished"
        );
        ctx.stats
    }

    async fn run_with(&self, ctx: &mut RunContext) {
        let target = match validate_run_target(&self.config) {
            Ok(target) => target,
            Err(e) => {
                ctx.record_failure(&failure_context(&e, &self.provided_arguments()), &e);
                return;
            }
        };

        if let Err(e) = self.storage.ensure_file(&target.catalog_path).await {
            ctx.record_failure(&failure_context(&e, &target.operation), &e);
            return;
        }
        ctx.error_log = ErrorLog::beside(&target.catalog_path);

        let catalog = match self.load(&target, ctx).await {
            Ok(catalog) => catalog,
            Err(e) => {
                ctx.record_failure(&failure_context(&e, &target.operation), &e);
                return;
            }
        };

        let operation = Operation::classify(&target.operation);
        match self.operate(&operation, catalog, &target, ctx).await {
            Ok(outcome) => print!("{}", table::render_outcome(&outcome)),
            Err(e) => ctx.record_failure(&failure_context(&e, operation.raw()), &e),
        }
    }

    async fn load(&self, target: &RunTarget, ctx: &mut RunContext) -> Result<Catalog> {
        let storage = self.storage.clone();
        let path = target.catalog_path.clone();
        let mut phase_ctx = ctx.clone();

        let report = run_phase(ctx, "load", async move {
            let result = load_catalog(&storage, &path, &mut phase_ctx).await;
            (phase_ctx, result)
        })
        .await?;
        Ok(report.catalog)
    }

    async fn operate(
        &self,
        operation: &Operation,
        mut catalog: Catalog,
        target: &RunTarget,
        ctx: &mut RunContext,
    ) -> Result<OperationOutcome> {
        let storage = self.storage.clone();
        let path = target.catalog_path.clone();
        let operation = operation.clone();
        let mut phase_ctx = ctx.clone();

        run_phase(ctx, "operate", async move {
            let result = execute(&operation, &mut catalog, &storage, &path, &mut phase_ctx.stats).await;
            (phase_ctx, result)
        })
        .await
    }

    fn provided_arguments(&self) -> String {
        let args = self.config.arguments();
        if args.is_empty() {
            "(none)".to_string()
        } else {
            args.join(" ")
        }
    }
}

/// Spawns a phase and waits for it to finish. The phase owns a copy of the
/// context and hands it back on completion; if the task dies, `ctx` keeps its
/// state from before the phase started.
///
/// Rolling back only covers the counters. Entries the phase already appended
/// to `errors.log` and lines already printed to stderr stay, so after a
/// panicked phase the log can hold more entries than `stats.errors` counts.
async fn run_phase<T, F>(ctx: &mut RunContext, phase: &'static str, task: F) -> Result<T>
where
    F: Future<Output = (RunContext, Result<T>)> + Send + 'static,
    T: Send + 'static,
{
    tracing::debug!("Starting {} phase", phase);
    match tokio::spawn(task).await {
        Ok((phase_ctx, result)) => {
            *ctx = phase_ctx;
            result
        }
        Err(e) => Err(TrackerError::Unexpected {
            message: format!("{} phase did not complete: {}", phase, e),
        }),
    }
}
