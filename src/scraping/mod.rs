pub mod clean_image_url;
pub mod extract_image_urls;
pub mod extract_style_urls;
