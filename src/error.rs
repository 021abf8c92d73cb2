use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Snapshot directory not found: {}", .0.display())]
    SnapshotDirMissing(PathBuf),

    /// Network failure, timeout or non-2xx status; all reported the same way.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}
