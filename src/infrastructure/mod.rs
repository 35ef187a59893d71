pub mod audio;
pub mod http;
pub mod observability;
pub mod text_processing;
pub mod vision;
