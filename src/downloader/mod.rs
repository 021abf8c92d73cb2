pub mod download_image;
pub mod download_images;
pub mod filename_from_url;
