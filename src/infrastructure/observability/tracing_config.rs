/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub const DEFAULT_FILTER: &'static str = "info,image_narrator=debug,tower_http=debug";

    pub fn new(environment: impl Into<String>, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            default_filter: Self::DEFAULT_FILTER.to_string(),
        }
    }

    /// JSON output is on when either the `logging.json` setting or a
    /// `LOG_FORMAT=json` override asks for it.
    pub fn from_settings(
        environment: impl Into<String>,
        json_setting: bool,
        log_format: Option<&str>,
    ) -> Self {
        let json_override = log_format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"));
        Self::new(environment, json_setting || json_override)
    }
}
