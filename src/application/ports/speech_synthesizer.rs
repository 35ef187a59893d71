use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("tts request failed: {0}")]
    Transport(String),
    #[error("tts provider error: {0}")]
    Provider(String),
    #[error("tts returned an empty response")]
    EmptyResponse,
    #[error("tts returned data that is not audio ({0} bytes)")]
    InvalidAudio(usize),
    #[error("tts response exceeded {0} bytes")]
    ResponseTooLarge(usize),
}
