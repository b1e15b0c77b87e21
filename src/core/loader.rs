use crate::core::context::RunContext;
use crate::domain::codec;
use crate::domain::model::{Catalog, LoadError, LoadReport};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Reads the whole catalog file and parses it line by line. Blank lines are
/// ignored and invalid lines are skipped and recorded; only a read failure
/// aborts the load.
pub async fn load_catalog<S: Storage>(
    storage: &S,
    path: &Path,
    ctx: &mut RunContext,
) -> Result<LoadReport> {
    tracing::debug!("Loading catalog from {}", path.display());
    let data = storage.read_file(path).await?;
    let content = String::from_utf8_lossy(&data);

    let mut catalog = Catalog::new();
    let mut rejected = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match codec::parse(line) {
            Ok(record) => {
                catalog.push(record);
                ctx.stats.valid_records += 1;
            }
            Err(reason) => {
                ctx.record_skipped_line(line, &reason);
                rejected.push(LoadError {
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        "Loaded {} records, skipped {} lines",
        catalog.len(),
        rejected.len()
    );
    Ok(LoadReport { catalog, rejected })
}
