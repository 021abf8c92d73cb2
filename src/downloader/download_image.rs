use std::path::Path;

use reqwest::{Client, Response};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::ScanError;

/// Downloads one image to `output_path`, streaming the body to disk through a
/// `chunk_size` buffer. A partially written file is removed on failure.
pub async fn download_image(
    client: &Client,
    image_url: &str,
    output_path: &Path,
    chunk_size: usize,
) -> Result<(), ScanError> {
    let mut response = client
        .get(image_url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|source| ScanError::Fetch {
            url: image_url.to_string(),
            source,
        })?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ScanError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let result = write_body(&mut response, image_url, output_path, chunk_size).await;
    if result.is_err() {
        let _ = fs::remove_file(output_path).await;
    }
    result
}

async fn write_body(
    response: &mut Response,
    image_url: &str,
    output_path: &Path,
    chunk_size: usize,
) -> Result<(), ScanError> {
    let write_error = |source| ScanError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).await.map_err(write_error)?;
    let mut writer = BufWriter::with_capacity(chunk_size, file);

    while let Some(chunk) = response.chunk().await.map_err(|source| ScanError::Fetch {
        url: image_url.to_string(),
        source,
    })? {
        writer.write_all(&chunk).await.map_err(write_error)?;
    }
    writer.flush().await.map_err(write_error)?;

    Ok(())
}
