use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ImageFetchError, ImageFetcher};

use super::limited_body::{BodyReadError, read_body_limited};

pub struct HttpImageDownloader {
    client: Client,
    timeout: Duration,
}

impl HttpImageDownloader {
    pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
    pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: Self::DOWNLOAD_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ImageFetcher for HttpImageDownloader {
    async fn fetch(&self, image_url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let response = self
            .client
            .get(image_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ImageFetchError::Download(format!("request: {e}")))?;

        if !response.status().is_success() {
            return Err(ImageFetchError::Download(format!(
                "status {}",
                response.status()
            )));
        }

        let image = read_body_limited(response, Self::MAX_IMAGE_BYTES)
            .await
            .map_err(|e| match e {
                BodyReadError::TooLarge { limit } => ImageFetchError::TooLarge { limit },
                BodyReadError::Transport(e) => ImageFetchError::Download(format!("body: {e}")),
            })?;

        tracing::debug!(bytes = image.len(), "Image download completed");

        Ok(image)
    }
}
