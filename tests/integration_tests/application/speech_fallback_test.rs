use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::post;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;

use image_narrator::application::ports::{VisionClient, VisionError};
use image_narrator::application::services::AnalysisService;
use image_narrator::domain::{AudioFormat, ImageUrl, fallback_wav};
use image_narrator::infrastructure::audio::AliyunTtsClient;
use image_narrator::infrastructure::http::HttpImageDownloader;

use crate::helpers::{fake_wav_bytes, start_mock_server};

const CAT_DESCRIPTION: &str = "A cat sitting on a windowsill.";

struct FixedVisionClient;

#[async_trait::async_trait]
impl VisionClient for FixedVisionClient {
    async fn describe_image_url(&self, _image_url: &str) -> Result<String, VisionError> {
        Ok(CAT_DESCRIPTION.to_string())
    }

    async fn describe_image_bytes(&self, _image: &[u8]) -> Result<String, VisionError> {
        Ok(CAT_DESCRIPTION.to_string())
    }
}

#[tokio::test]
async fn given_stalled_tts_when_analyzing_url_then_returns_description_with_fallback_wav() {
    let app = Router::new().route(
        "/tts",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            fake_wav_bytes()
        }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;

    let tts = AliyunTtsClient::new(Client::new(), &format!("{base_url}/tts"), "k", "t")
        .with_timeout(Duration::from_millis(200));
    let service = AnalysisService::new(
        Arc::new(FixedVisionClient),
        Arc::new(tts),
        Arc::new(HttpImageDownloader::new(Client::new())),
    );

    let result = service
        .analyze_image_url(&ImageUrl::parse("https://img.example/cat.png").unwrap())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.description.as_deref(), Some(CAT_DESCRIPTION));
    assert_eq!(result.audio_format, Some(AudioFormat::Wav));

    let audio = general_purpose::STANDARD
        .decode(result.audio_data.unwrap())
        .unwrap();
    assert_eq!(audio.len(), 64_044);
    assert_eq!(audio, fallback_wav());
    shutdown_tx.send(()).ok();
}
