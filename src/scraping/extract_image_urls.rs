use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tokio::fs;

use crate::scraping::clean_image_url::clean_image_url;
use crate::scraping::extract_style_urls::extract_style_urls;

const IMAGE_ATTRIBUTES: [&str; 3] = ["src", "data-src", "data-image"];

/// Extract the absolute image URLs referenced by `img` attributes and inline
/// `style` backgrounds, query strings removed.
pub fn extract_image_urls(html_content: &str) -> BTreeSet<String> {
    let document = Html::parse_document(html_content);
    let mut image_urls = BTreeSet::new();

    if let Ok(selector) = Selector::parse("img") {
        for element in document.select(&selector) {
            for attribute in IMAGE_ATTRIBUTES {
                if let Some(url) = element.value().attr(attribute).and_then(clean_image_url) {
                    image_urls.insert(url);
                }
            }
        }
    }

    if let Ok(selector) = Selector::parse("[style]") {
        for element in document.select(&selector) {
            if let Some(style) = element.value().attr("style") {
                image_urls.extend(
                    extract_style_urls(style)
                        .iter()
                        .filter_map(|url| clean_image_url(url)),
                );
            }
        }
    }

    image_urls
}

/// Reads a saved page, ignoring invalid UTF-8, and extracts its image URLs.
pub async fn extract_image_urls_from_file(html_file: &Path) -> Result<BTreeSet<String>> {
    let bytes = fs::read(html_file)
        .await
        .with_context(|| format!("Failed to read {}", html_file.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(extract_image_urls(&content))
}
