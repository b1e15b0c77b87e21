#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::validate_file_suffix;
use std::path::PathBuf;

pub const CATALOG_SUFFIX: &str = ".txt";

/// A validated invocation: which catalog to open and what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTarget {
    pub catalog_path: PathBuf,
    pub operation: String,
}

pub fn validate_run_target<C: ConfigProvider + ?Sized>(config: &C) -> Result<RunTarget> {
    let (Some(catalog_file), Some(operation)) = (config.catalog_file(), config.operation()) else {
        return Err(TrackerError::InsufficientArguments);
    };

    validate_file_suffix(catalog_file, CATALOG_SUFFIX)?;

    Ok(RunTarget {
        catalog_path: PathBuf::from(catalog_file),
        operation: operation.to_string(),
    })
}

/// Positional arguments without a command-line parser, for embedding the
/// tracker or driving it from tests.
#[derive(Debug, Clone, Default)]
pub struct ArgList(pub Vec<String>);

impl ArgList {
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }
}

impl ConfigProvider for ArgList {
    fn catalog_file(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    fn operation(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    fn arguments(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }
}
