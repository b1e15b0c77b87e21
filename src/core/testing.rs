//! In-memory storages for unit tests.

use crate::domain::ports::Storage;
use crate::utils::error::{Result, TrackerError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_file(path: &Path, content: &str) -> Self {
        let storage = Self::new();
        storage
            .files
            .lock()
            .await
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        storage
    }

    pub async fn get_file(&self, path: &Path) -> Option<String> {
        let files = self.files.lock().await;
        files
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            TrackerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ))
        })
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    async fn ensure_file(&self, path: &Path) -> Result<()> {
        let mut files = self.files.lock().await;
        files.entry(path.to_path_buf()).or_default();
        Ok(())
    }
}

/// Reads succeed from the wrapped storage; every write fails.
#[derive(Clone, Default)]
pub struct ReadOnlyStorage {
    pub inner: MockStorage,
}

impl Storage for ReadOnlyStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.inner.read_file(path).await
    }

    async fn write_file(&self, path: &Path, _data: &[u8]) -> Result<()> {
        Err(TrackerError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("read-only: {}", path.display()),
        )))
    }

    async fn ensure_file(&self, path: &Path) -> Result<()> {
        self.inner.ensure_file(path).await
    }
}

/// Panics on read, standing in for a phase task that dies.
#[derive(Clone, Default)]
pub struct PanickingStorage;

impl Storage for PanickingStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        panic!("storage lost while reading {}", path.display())
    }

    async fn write_file(&self, _path: &Path, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn ensure_file(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
