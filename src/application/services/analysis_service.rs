use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{
    ImageFetchError, ImageFetcher, SpeechSynthesizer, VisionClient, VisionError,
};
use crate::domain::{AnalysisResult, ImageUrl, SpeechOutcome, fallback_wav};

/// Runs describe-then-narrate for a single image.
pub struct AnalysisService<V, S>
where
    V: VisionClient,
    S: SpeechSynthesizer,
{
    vision_client: Arc<V>,
    speech_synthesizer: Arc<S>,
    image_fetcher: Arc<dyn ImageFetcher>,
}

impl<V, S> AnalysisService<V, S>
where
    V: VisionClient,
    S: SpeechSynthesizer,
{
    pub fn new(
        vision_client: Arc<V>,
        speech_synthesizer: Arc<S>,
        image_fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            vision_client,
            speech_synthesizer,
            image_fetcher,
        }
    }

    /// Lets the vision provider fetch the image itself.
    pub async fn analyze_image_url(
        &self,
        image_url: &ImageUrl,
    ) -> Result<AnalysisResult, AnalysisError> {
        let started = Instant::now();

        let description = self
            .vision_client
            .describe_image_url(image_url.as_str())
            .await
            .map_err(AnalysisError::Description)?;

        tracing::info!(
            description_chars = description.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Image described"
        );

        Ok(self.narrate(description, started).await)
    }

    /// Downloads the image first and uploads the bytes inline.
    pub async fn analyze_downloaded_image(
        &self,
        image_url: &ImageUrl,
    ) -> Result<AnalysisResult, AnalysisError> {
        let started = Instant::now();

        let image = self
            .image_fetcher
            .fetch(image_url.as_str())
            .await
            .map_err(AnalysisError::Download)?;

        tracing::info!(image_bytes = image.len(), "Image downloaded");

        let description = self
            .vision_client
            .describe_image_bytes(&image)
            .await
            .map_err(AnalysisError::Description)?;
        drop(image);

        tracing::info!(
            description_chars = description.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Image described"
        );

        Ok(self.narrate(description, started).await)
    }

    async fn narrate(&self, description: String, started: Instant) -> AnalysisResult {
        let speech = self.synthesize_with_fallback(&description).await;

        tracing::info!(
            audio_source = speech.source(),
            audio_bytes = speech.bytes().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis completed"
        );

        AnalysisResult::success(description, &speech.into_bytes())
    }

    /// Speech failures never reach the caller; they become silence.
    pub async fn synthesize_with_fallback(&self, text: &str) -> SpeechOutcome {
        match self.speech_synthesizer.synthesize(text).await {
            Ok(audio) => SpeechOutcome::Synthesized(audio),
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed, serving silent audio");
                SpeechOutcome::Fallback(fallback_wav())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("processing failed: {0}")]
    Download(ImageFetchError),
    #[error("processing failed: {0}")]
    Description(VisionError),
}
