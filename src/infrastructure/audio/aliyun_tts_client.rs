use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::infrastructure::http::{BodyReadError, read_body_limited};
use crate::infrastructure::text_processing::sanitize_speech_text;

use super::audio_sniffer::sniff_audio;

const OUTPUT_FORMAT: &str = "wav";

/// Aliyun NLS speech synthesis over its HTTP gateway.
pub struct AliyunTtsClient {
    client: Client,
    api_url: String,
    app_key: String,
    token: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct TtsRequest<'a> {
    appkey: &'a str,
    text: &'a str,
    token: &'a str,
    format: &'a str,
}

impl AliyunTtsClient {
    pub const TTS_TIMEOUT: Duration = Duration::from_secs(30);
    pub const MAX_AUDIO_BYTES: usize = 50 * 1024 * 1024;

    pub fn new(client: Client, api_url: &str, app_key: &str, token: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
            app_key: app_key.to_string(),
            token: token.to_string(),
            timeout: Self::TTS_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for AliyunTtsClient {
    #[tracing::instrument(skip(self, text), fields(text_chars = text.chars().count()))]
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let clean_text = sanitize_speech_text(text);

        tracing::debug!(
            clean_chars = clean_text.chars().count(),
            "Sending text to Aliyun TTS"
        );

        let request = TtsRequest {
            appkey: &self.app_key,
            text: &clean_text,
            token: &self.token,
            format: OUTPUT_FORMAT,
        };

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechError::Transport(format!("request: {e}")))?;

        let status = response.status();

        let body = read_body_limited(response, Self::MAX_AUDIO_BYTES)
            .await
            .map_err(|e| match e {
                BodyReadError::TooLarge { limit } => SpeechError::ResponseTooLarge(limit),
                BodyReadError::Transport(e) => SpeechError::Transport(format!("body: {e}")),
            })?;

        if !status.is_success() {
            let detail = provider_error_message(&body)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
            return Err(SpeechError::Provider(format!("status {status}: {detail}")));
        }

        if body.is_empty() {
            return Err(SpeechError::EmptyResponse);
        }

        if body[0] == b'{' {
            if let Some(message) = provider_error_message(&body) {
                return Err(SpeechError::Provider(message));
            }
            tracing::debug!("Body starts with '{{' but carries no error, treating as audio");
        }

        match sniff_audio(&body) {
            Some(signature) => {
                tracing::info!(
                    bytes = body.len(),
                    signature = ?signature,
                    "Aliyun TTS synthesis completed"
                );
                Ok(body)
            }
            None => Err(SpeechError::InvalidAudio(body.len())),
        }
    }
}

/// Pulls `message` or `error` out of a JSON error payload.
fn provider_error_message(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    let field = payload.get("message").or_else(|| payload.get("error"))?;

    Some(match field {
        Value::String(message) => message.clone(),
        Value::Object(inner) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| field.to_string()),
        other => other.to_string(),
    })
}
