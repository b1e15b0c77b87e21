use crate::utils::error::TrackerError;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ERROR_LOG_FILE: &str = "errors.log";

/// Append-only `errors.log` sink. The file is opened, written and closed for
/// every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `errors.log` in the catalog's directory, or the working directory when
    /// the catalog path has no parent component.
    pub fn beside(catalog_path: &Path) -> Self {
        match catalog_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent.join(ERROR_LOG_FILE)),
            _ => Self::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, context: &str, error: &TrackerError) {
        let line = format_entry(&timestamp(), context, error);

        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = written {
            tracing::debug!("error log {} is not writable: {}", self.path.display(), e);
            eprintln!("Could not write to error log: {}", e);
        }
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(ERROR_LOG_FILE)
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn format_entry(timestamp: &str, context: &str, error: &TrackerError) -> String {
    format!("[{}] {} - {}: {}\n", timestamp, context, error.kind(), error)
}
