use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, VisionClient};
use crate::application::services::AnalysisService;

pub struct AppState<V, S>
where
    V: VisionClient,
    S: SpeechSynthesizer,
{
    pub analysis_service: Arc<AnalysisService<V, S>>,
}

impl<V, S> Clone for AppState<V, S>
where
    V: VisionClient,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
