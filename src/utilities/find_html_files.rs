use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Lists the `.html` files of the snapshot directory, or every regular file
/// when none carry that extension. Not recursive; sorted by path.
pub async fn find_html_files(snapshot_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(snapshot_dir)
        .await
        .with_context(|| format!("Failed to list {}", snapshot_dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if let Ok(metadata) = fs::metadata(&path).await {
            if metadata.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();

    let html_files: Vec<PathBuf> = files
        .iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .cloned()
        .collect();

    if html_files.is_empty() {
        Ok(files)
    } else {
        Ok(html_files)
    }
}
