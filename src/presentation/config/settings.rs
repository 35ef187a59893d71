use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub vision: VisionSettings,
    pub tts: TtsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    pub api_key: String,
    pub compatible_url: String,
    pub native_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsSettings {
    pub api_url: String,
    pub app_key: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}.toml` when present,
    /// and `APP_`-prefixed variables (`APP_VISION__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("vision.api_key", "")?
            .set_default(
                "vision.compatible_url",
                "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions",
            )?
            .set_default(
                "vision.native_url",
                "https://dashscope.aliyuncs.com/api/v1/services/aigc/multimodal-generation/generation",
            )?
            .set_default("vision.model", "qwen-vl-plus")?
            .set_default(
                "tts.api_url",
                "https://nls-gateway-cn-shanghai.aliyuncs.com/stream/v1/tts",
            )?
            .set_default("tts.app_key", "")?
            .set_default("tts.token", "")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
