use async_trait::async_trait;

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, image_url: &str) -> Result<Vec<u8>, ImageFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageFetchError {
    #[error("image download failed: {0}")]
    Download(String),
    #[error("image exceeds {limit} bytes")]
    TooLarge { limit: usize },
}
