use reqwest::Response;

#[derive(Debug, thiserror::Error)]
pub enum BodyReadError {
    #[error("body read failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// Buffers a response body, giving up as soon as it grows past `limit` bytes.
pub async fn read_body_limited(
    mut response: Response,
    limit: usize,
) -> Result<Vec<u8>, BodyReadError> {
    let declared = response.content_length().unwrap_or(0);
    if declared > limit as u64 {
        return Err(BodyReadError::TooLarge { limit });
    }

    let mut body = Vec::with_capacity(declared as usize);

    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(BodyReadError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}
