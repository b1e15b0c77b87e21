use crate::domain::model::RunStatistics;
use crate::utils::error::TrackerError;
use crate::utils::error_log::ErrorLog;

/// Per-run state handed to each phase: the counters and the error log sink.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub stats: RunStatistics,
    pub error_log: ErrorLog,
}

impl RunContext {
    pub fn new(error_log: ErrorLog) -> Self {
        Self {
            stats: RunStatistics::default(),
            error_log,
        }
    }

    /// Writes exactly one line to stderr per failure. The `tracing` event is
    /// debug level and only shows with `--verbose`.
    pub fn record_failure(&mut self, context: &str, error: &TrackerError) {
        self.stats.errors += 1;
        tracing::debug!("{} - {}: {}", context, error.kind(), error);
        self.error_log.append(context, error);
        eprintln!("Error: {}: {}", error.kind(), error);
    }

    pub fn record_skipped_line(&mut self, line: &str, error: &TrackerError) {
        self.stats.errors += 1;
        let context = format!("INVALID LINE: \"{}\"", line);
        tracing::debug!("{} - {}: {}", context, error.kind(), error);
        self.error_log.append(&context, error);
        eprintln!("Warning - skipping invalid line: {}: {}", error.kind(), error);
    }
}

/// Error-log context line for a failure, keyed on what failed.
pub fn failure_context(error: &TrackerError, subject: &str) -> String {
    match error {
        TrackerError::InsufficientArguments => {
            format!("INSUFFICIENT ARGUMENTS: \"{}\"", subject)
        }
        TrackerError::InvalidFileName { name } => format!("INVALID FILE NAME: \"{}\"", name),
        TrackerError::DuplicateIsbn { .. } => format!("DUPLICATE ISBN: \"{}\"", subject),
        TrackerError::Io(e) => format!("IO ERROR: \"{}\"", e),
        TrackerError::Unexpected { message } => format!("UNEXPECTED ERROR: \"{}\"", message),
        _ => format!("INVALID INPUT: \"{}\"", subject),
    }
}
