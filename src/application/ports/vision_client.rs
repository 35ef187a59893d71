use async_trait::async_trait;

#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Describes an image the provider can fetch by itself.
    async fn describe_image_url(&self, image_url: &str) -> Result<String, VisionError>;

    /// Describes an image uploaded inline as raw bytes.
    async fn describe_image_bytes(&self, image: &[u8]) -> Result<String, VisionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("vision request failed: {0}")]
    Transport(String),
    #[error("vision provider error: {0}")]
    Provider(String),
    #[error("unexpected vision response format: {0}")]
    UnexpectedFormat(String),
    #[error("vision response exceeds {0} bytes")]
    ResponseTooLarge(usize),
}
