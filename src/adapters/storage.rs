use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::fs;

/// Plain filesystem storage. Writes truncate and rewrite the target in place;
/// there is no temp file or rename, so an interrupted write can leave a
/// partially written catalog behind.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).await?;
        Ok(())
    }

    async fn ensure_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if !fs::try_exists(path).await? {
            tracing::debug!("Creating empty catalog at {}", path.display());
            fs::File::create(path).await?;
        }
        Ok(())
    }
}
