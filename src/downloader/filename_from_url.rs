use std::path::Path;

/// Derives the output filename from the last path segment of an image URL,
/// taken as written in the URL (no percent-encoding or decoding).
///
/// Names without an extension get `.jpg`; `%20` and `+` become `_`.
pub fn filename_from_url(image_url: &str) -> String {
    let mut filename = last_path_segment(image_url).to_string();

    if Path::new(&filename).extension().is_none() {
        filename.push_str(".jpg");
    }

    filename.replace("%20", "_").replace('+', "_")
}

fn last_path_segment(image_url: &str) -> &str {
    let after_scheme = image_url
        .split_once("://")
        .map_or(image_url, |(_, rest)| rest);

    // The authority ends at the first `/`, `?` or `#`.
    let path = match after_scheme.find(&['/', '?', '#'][..]) {
        Some(start) if after_scheme[start..].starts_with('/') => &after_scheme[start..],
        _ => "",
    };
    let path = path.split(&['?', '#'][..]).next().unwrap_or_default();

    path.rsplit('/').next().unwrap_or_default()
}
