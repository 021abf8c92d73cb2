/// Keeps absolute `http(s)` URLs only and drops everything from the first `?`.
pub fn clean_image_url(raw_url: &str) -> Option<String> {
    let url = raw_url.trim();

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return None;
    }

    let without_query = url.split('?').next().unwrap_or(url);
    Some(without_query.to_string())
}
