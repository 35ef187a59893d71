use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{VisionClient, VisionError};
use crate::infrastructure::http::{BodyReadError, read_body_limited};

pub const STORY_PROMPT: &str =
    "Write a short story based on the content of this image, around 100 characters.";
pub const DESCRIBE_PROMPT: &str = "Describe this image in detail, covering the main objects, \
     the scene, colors and actions, in around 200 characters.";

/// Qwen-VL over DashScope. URLs go through the OpenAI-compatible endpoint,
/// inline bytes through the native multimodal endpoint.
pub struct QwenVisionClient {
    client: Client,
    api_key: String,
    compatible_url: String,
    native_url: String,
    model: String,
    timeout: Duration,
    max_response_bytes: usize,
}

impl QwenVisionClient {
    pub const VISION_TIMEOUT: Duration = Duration::from_secs(60);
    pub const MAX_RESPONSE_BYTES: usize = 50 * 1024 * 1024;

    pub fn new(
        client: Client,
        api_key: &str,
        compatible_url: &str,
        native_url: &str,
        model: &str,
    ) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            compatible_url: compatible_url.to_string(),
            native_url: native_url.to_string(),
            model: model.to_string(),
            timeout: Self::VISION_TIMEOUT,
            max_response_bytes: Self::MAX_RESPONSE_BYTES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }

    async fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<(StatusCode, String), VisionError> {
        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| VisionError::Transport(format!("request: {e}")))?;

        let status = response.status();
        let raw = read_body_limited(response, self.max_response_bytes)
            .await
            .map_err(|e| match e {
                BodyReadError::TooLarge { limit } => VisionError::ResponseTooLarge(limit),
                BodyReadError::Transport(e) => VisionError::Transport(format!("body: {e}")),
            })?;

        Ok((status, String::from_utf8_lossy(&raw).into_owned()))
    }
}

#[async_trait]
impl VisionClient for QwenVisionClient {
    #[tracing::instrument(skip(self, image_url), fields(model = %self.model))]
    async fn describe_image_url(&self, image_url: &str) -> Result<String, VisionError> {
        let request = CompatibleRequest {
            model: &self.model,
            messages: [CompatibleMessage {
                role: "user",
                content: vec![
                    CompatiblePart::ImageUrl {
                        image_url: ImageReference { url: image_url },
                    },
                    CompatiblePart::Text { text: STORY_PROMPT },
                ],
            }],
        };

        let (status, raw) = self.post(&self.compatible_url, &request).await?;
        let content = parse_compatible_response(status, &raw)?;

        tracing::info!(chars = content.chars().count(), "Qwen URL analysis completed");
        Ok(content)
    }

    #[tracing::instrument(skip(self, image), fields(model = %self.model, image_bytes = image.len()))]
    async fn describe_image_bytes(&self, image: &[u8]) -> Result<String, VisionError> {
        let data_uri = format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(image)
        );

        let request = NativeRequest {
            model: &self.model,
            input: NativeInput {
                messages: [NativeMessage {
                    role: "user",
                    content: vec![
                        NativePart::Image { image: &data_uri },
                        NativePart::Text {
                            text: DESCRIBE_PROMPT,
                        },
                    ],
                }],
            },
            parameters: NativeParameters {
                result_format: "message",
            },
        };

        let (status, raw) = self.post(&self.native_url, &request).await?;
        let content = parse_native_response(status, &raw)?;

        tracing::info!(chars = content.chars().count(), "Qwen image analysis completed");
        Ok(content)
    }
}

pub fn parse_compatible_response(status: StatusCode, raw: &str) -> Result<String, VisionError> {
    let Ok(parsed) = serde_json::from_str::<CompatibleResponse>(raw) else {
        return Err(unmatched_response(status, raw));
    };

    if status.is_success() {
        if let Some(content) = first_content(parsed.choices) {
            return Ok(content);
        }
    }

    if let Some(error) = parsed.error {
        return Err(VisionError::Provider(error.into_message()));
    }

    Err(unmatched_response(status, raw))
}

pub fn parse_native_response(status: StatusCode, raw: &str) -> Result<String, VisionError> {
    let Ok(parsed) = serde_json::from_str::<NativeResponse>(raw) else {
        return Err(unmatched_response(status, raw));
    };

    if status.is_success() {
        if let Some(content) = parsed.output.and_then(|o| first_content(o.choices)) {
            return Ok(content);
        }
    }

    if let Some(message) = parsed.message {
        return Err(VisionError::Provider(message));
    }

    Err(unmatched_response(status, raw))
}

fn first_content(choices: Vec<Choice>) -> Option<String> {
    choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(MessageContent::into_text)
}

fn unmatched_response(status: StatusCode, raw: &str) -> VisionError {
    if status.is_success() {
        VisionError::UnexpectedFormat(raw.to_string())
    } else {
        VisionError::Provider(format!("status {status}: {raw}"))
    }
}

#[derive(Serialize)]
struct CompatibleRequest<'a> {
    model: &'a str,
    messages: [CompatibleMessage<'a>; 1],
}

#[derive(Serialize)]
struct CompatibleMessage<'a> {
    role: &'static str,
    content: Vec<CompatiblePart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CompatiblePart<'a> {
    ImageUrl { image_url: ImageReference<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct ImageReference<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct NativeRequest<'a> {
    model: &'a str,
    input: NativeInput<'a>,
    parameters: NativeParameters,
}

#[derive(Serialize)]
struct NativeInput<'a> {
    messages: [NativeMessage<'a>; 1],
}

#[derive(Serialize)]
struct NativeMessage<'a> {
    role: &'static str,
    content: Vec<NativePart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum NativePart<'a> {
    Image { image: &'a str },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct NativeParameters {
    result_format: &'static str,
}

#[derive(Deserialize)]
struct CompatibleResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ProviderErrorBody>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderErrorBody {
    Detailed { message: Option<String> },
    Plain(String),
}

impl ProviderErrorBody {
    fn into_message(self) -> String {
        match self {
            Self::Detailed { message } => message.unwrap_or_else(|| "unknown error".to_string()),
            Self::Plain(message) => message,
        }
    }
}

#[derive(Deserialize)]
struct NativeResponse {
    output: Option<NativeOutput>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct NativeOutput {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<MessageContent>,
}

/// The native endpoint answers multimodal requests with a list of parts.
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl MessageContent {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Parts(parts) => parts.into_iter().filter_map(|p| p.text).collect(),
        }
    }
}
