use std::collections::{BTreeMap, BTreeSet};

use crate::downloader::filename_from_url::filename_from_url;

/// Output filenames shared by two or more distinct URLs, with those URLs in
/// sorted order. Collisions are only reported; the first URL wins on disk.
pub fn find_filename_collisions(image_urls: &BTreeSet<String>) -> BTreeMap<String, Vec<String>> {
    let mut by_filename: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for image_url in image_urls {
        by_filename
            .entry(filename_from_url(image_url))
            .or_default()
            .push(image_url.clone());
    }

    by_filename.retain(|_, urls| urls.len() > 1);
    by_filename
}
