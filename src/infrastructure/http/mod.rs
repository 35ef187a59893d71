mod client;
mod image_downloader;
mod limited_body;

pub use client::build_http_client;
pub use image_downloader::HttpImageDownloader;
pub use limited_body::{BodyReadError, read_body_limited};
