use axum::http::StatusCode;
use axum::response::IntoResponse;

pub const HEALTH_MESSAGE: &str = "Service is running";

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_MESSAGE)
}
