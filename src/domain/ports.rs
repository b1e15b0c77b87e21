use crate::utils::error::Result;
use std::future::Future;
use std::path::Path;

/// Whole-file access to the catalog. Implementations are moved into the
/// spawned load and operate tasks, hence `Clone + 'static`.
pub trait Storage: Clone + Send + Sync + 'static {
    fn read_file(&self, path: &Path) -> impl Future<Output = Result<Vec<u8>>> + Send;

    /// Replaces the file contents entirely.
    fn write_file(&self, path: &Path, data: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Creates missing parent directories and an empty file if absent.
    fn ensure_file(&self, path: &Path) -> impl Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_file(&self) -> Option<&str>;
    fn operation(&self) -> Option<&str>;

    /// Every argument as given on the command line, for error reporting.
    fn arguments(&self) -> Vec<&str>;
}
