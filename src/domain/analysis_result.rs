use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
}

/// Wire shape returned by the analyze endpoint.
///
/// Either `description`, `audio_data` and `audio_format` are set (success) or
/// only `error` is. Use [`AnalysisResult::success`] and
/// [`AnalysisResult::failure`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    pub description: Option<String>,
    pub audio_data: Option<String>,
    pub audio_format: Option<AudioFormat>,
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn success(description: String, audio: &[u8]) -> Self {
        Self {
            success: true,
            description: Some(description),
            audio_data: Some(general_purpose::STANDARD.encode(audio)),
            audio_format: Some(AudioFormat::Wav),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            description: None,
            audio_data: None,
            audio_format: None,
            error: Some(error.into()),
        }
    }
}
