pub mod collect_image_urls;
pub mod find_filename_collisions;
pub mod find_html_files;
pub mod prepare_directories;
