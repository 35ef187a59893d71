use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{SpeechSynthesizer, VisionClient};
use crate::domain::{AnalysisResult, ImageUrl};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image_url: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<V, S>(
    State(state): State<AppState<V, S>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse
where
    V: VisionClient + 'static,
    S: SpeechSynthesizer + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected analyze request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(AnalysisResult::failure(rejection.body_text())),
            )
                .into_response();
        }
    };

    let image_url = match ImageUrl::parse(&request.image_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Analyze request without imageUrl");
            return (
                StatusCode::BAD_REQUEST,
                Json(AnalysisResult::failure(e.to_string())),
            )
                .into_response();
        }
    };

    tracing::info!(image_url = %sanitize_for_log(image_url.as_str()), "Analyzing image");

    match state.analysis_service.analyze_image_url(&image_url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Image analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalysisResult::failure(format!(
                    "Image analysis failed: {e}"
                ))),
            )
                .into_response()
        }
    }
}
