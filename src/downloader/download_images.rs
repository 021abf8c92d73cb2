use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::Client;
use tokio::fs;

use crate::config::AppConfig;
use crate::downloader::download_image::download_image;
use crate::downloader::filename_from_url::filename_from_url;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub total: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Downloads every image URL in sorted order, one at a time. Files already
/// present in the output directory are skipped; failed downloads are logged
/// and do not stop the run.
pub async fn download_images(
    config: &AppConfig,
    image_urls: &BTreeSet<String>,
) -> Result<DownloadSummary> {
    let output_dir = config.output_path();
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let total = image_urls.len();
    let mut summary = DownloadSummary {
        total,
        ..DownloadSummary::default()
    };

    for (index, image_url) in image_urls.iter().enumerate() {
        let position = index + 1;
        let filename = filename_from_url(image_url);
        let output_path = output_dir.join(&filename);

        if fs::try_exists(&output_path).await.unwrap_or(false) {
            println!(
                "{}",
                format!("[{}/{}] Skipping {} (already exists)", position, total, filename).yellow()
            );
            summary.skipped += 1;
            continue;
        }

        println!(
            "{}",
            format!("[{}/{}] Downloading {}...", position, total, filename).green()
        );
        match download_image(&client, image_url, &output_path, config.chunk_size).await {
            Ok(()) => summary.downloaded += 1,
            Err(e) => {
                println!("{}", format!("Error downloading {}: {}", image_url, e).red());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_config(output_dir: &TempDir) -> AppConfig {
        AppConfig {
            snapshot_dir: "unused".to_string(),
            output_dir: output_dir.path().display().to_string(),
            timeout_secs: 5,
            chunk_size: 8192,
        }
    }

    fn url_set(urls: &[String]) -> BTreeSet<String> {
        urls.iter().cloned().collect()
    }

    #[tokio::test]
    async fn rerun_downloads_nothing_new() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/photo"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let output_dir = TempDir::new().unwrap();
        let config = test_config(&output_dir);
        let urls = url_set(&[
            format!("{}/a.png", server.uri()),
            format!("{}/photo", server.uri()),
        ]);

        let first = download_images(&config, &urls).await.unwrap();
        assert_eq!(
            first,
            DownloadSummary {
                total: 2,
                downloaded: 2,
                skipped: 0,
                failed: 0
            }
        );
        assert_eq!(fs::read(output_dir.path().join("a.png")).unwrap(), b"png");
        assert_eq!(fs::read(output_dir.path().join("photo.jpg")).unwrap(), b"jpeg");

        let second = download_images(&config, &urls).await.unwrap();
        assert_eq!(
            second,
            DownloadSummary {
                total: 2,
                downloaded: 0,
                skipped: 2,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn failures_do_not_stop_the_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken.png"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fine.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .mount(&server)
            .await;

        let output_dir = TempDir::new().unwrap();
        let config = test_config(&output_dir);
        let urls = url_set(&[
            format!("{}/broken.png", server.uri()),
            format!("{}/fine.png", server.uri()),
        ]);

        let summary = download_images(&config, &urls).await.unwrap();

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, 1);
        assert!(!output_dir.path().join("broken.png").exists());
        assert!(output_dir.path().join("fine.png").exists());
    }

    #[tokio::test]
    async fn colliding_filename_keeps_first_url() {
        let first_server = MockServer::start().await;
        let second_server = MockServer::start().await;
        for (server, body) in [(&first_server, "first"), (&second_server, "second")] {
            Mock::given(method("GET"))
                .and(path("/logo.png"))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .mount(server)
                .await;
        }

        let output_dir = TempDir::new().unwrap();
        let config = test_config(&output_dir);
        let urls = url_set(&[
            format!("{}/logo.png", first_server.uri()),
            format!("{}/logo.png", second_server.uri()),
        ]);
        let winner = urls.iter().next().unwrap();
        let expected = if winner.starts_with(&first_server.uri()) {
            "first"
        } else {
            "second"
        };

        let summary = download_images(&config, &urls).await.unwrap();

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            fs::read_to_string(output_dir.path().join("logo.png")).unwrap(),
            expected
        );
    }
}
