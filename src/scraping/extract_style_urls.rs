use regex::Regex;

/// Extracts every `url(...)` reference of an inline style. Quoted references
/// may contain `)` and spaces; unquoted ones stop at either.
pub fn extract_style_urls(style: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r#"url\(\s*(?:'([^']*)'|"([^"]*)"|([^"')\s]+))\s*\)"#) else {
        return Vec::new();
    };

    re.captures_iter(style)
        .filter_map(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
        .map(|m| m.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
