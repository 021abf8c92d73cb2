use std::collections::BTreeSet;
use std::path::PathBuf;

use colored::Colorize;

use crate::scraping::extract_image_urls::extract_image_urls_from_file;

/// Merges the image URLs of every page into one set. Unreadable pages are
/// reported and skipped.
pub async fn collect_image_urls(html_files: &[PathBuf]) -> BTreeSet<String> {
    let mut all_image_urls = BTreeSet::new();

    println!("Extracting image URLs from HTML files...");
    for html_file in html_files {
        let name = html_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| html_file.display().to_string());
        println!("Processing {}...", name);

        match extract_image_urls_from_file(html_file).await {
            Ok(image_urls) => {
                println!("  Found {} unique images", image_urls.len());
                all_image_urls.extend(image_urls);
            }
            Err(e) => eprintln!("{}", format!("  Skipping {}: {:#}", name, e).red()),
        }
    }

    all_image_urls
}
