use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::error::ScanError;

pub async fn ensure_snapshot_dir(snapshot_dir: &Path) -> Result<(), ScanError> {
    match fs::try_exists(snapshot_dir).await {
        Ok(true) => Ok(()),
        _ => Err(ScanError::SnapshotDirMissing(snapshot_dir.to_path_buf())),
    }
}

/// Fails before touching anything when the snapshot directory is missing,
/// otherwise creates the output directory.
pub async fn prepare_directories(snapshot_dir: &Path, output_dir: &Path) -> Result<()> {
    ensure_snapshot_dir(snapshot_dir).await?;

    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    Ok(())
}
