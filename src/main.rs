use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use image_narrator::application::services::AnalysisService;
use image_narrator::infrastructure::audio::AliyunTtsClient;
use image_narrator::infrastructure::http::{HttpImageDownloader, build_http_client};
use image_narrator::infrastructure::observability::{TracingConfig, init_tracing};
use image_narrator::infrastructure::vision::QwenVisionClient;
use image_narrator::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        settings.logging.json,
        std::env::var("LOG_FORMAT").ok().as_deref(),
    ));

    if settings.vision.api_key.is_empty() {
        tracing::warn!("vision.api_key is empty, image analysis requests will be rejected upstream");
    }

    let http_client = build_http_client().context("failed to build HTTP client")?;

    let vision_client = Arc::new(QwenVisionClient::new(
        http_client.clone(),
        &settings.vision.api_key,
        &settings.vision.compatible_url,
        &settings.vision.native_url,
        &settings.vision.model,
    ));
    let speech_synthesizer = Arc::new(AliyunTtsClient::new(
        http_client.clone(),
        &settings.tts.api_url,
        &settings.tts.app_key,
        &settings.tts.token,
    ));
    let image_fetcher = Arc::new(HttpImageDownloader::new(http_client));

    let analysis_service = Arc::new(AnalysisService::new(
        vision_client,
        speech_synthesizer,
        image_fetcher,
    ));

    let router = create_router(AppState { analysis_service });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
