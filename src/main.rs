use std::process;

use anyhow::{Context, Result};
use colored::Colorize;

use downloader::download_images::download_images;
use utilities::{
    collect_image_urls::collect_image_urls,
    find_filename_collisions::find_filename_collisions,
    find_html_files::find_html_files,
    prepare_directories::prepare_directories,
};

// Import modules
mod config;
mod downloader;
mod error;
mod scraping;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", format!("{:#}", e).red());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load configuration settings
    let config = config::load_config().context("Failed to load configuration")?;
    let snapshot_dir = config.snapshot_path();
    let output_dir = config.output_path();

    prepare_directories(&snapshot_dir, &output_dir).await?;

    // Collect the image URLs of every saved page
    let html_files = find_html_files(&snapshot_dir).await?;
    let image_urls = collect_image_urls(&html_files).await;

    println!("\nTotal unique images found: {}", image_urls.len());

    for (filename, urls) in find_filename_collisions(&image_urls) {
        println!(
            "{}",
            format!(
                "Warning: {} URLs map to {}, only the first will be saved: {}",
                urls.len(),
                filename,
                urls.join(", ")
            )
            .yellow()
        );
    }

    println!("\nDownloading images...");
    let summary = download_images(&config, &image_urls).await?;

    println!(
        "\nDownloaded {} new images to {}/",
        summary.downloaded,
        output_dir.display()
    );
    if summary.skipped > 0 || summary.failed > 0 {
        println!(
            "Skipped {} existing, {} failed, {} total",
            summary.skipped, summary.failed, summary.total
        );
    }

    Ok(())
}
