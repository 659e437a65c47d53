use crate::dtos::WelcomeResponse;
use crate::services::metrics::get_metrics;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Welcome to Nuvora AI Backend!";

pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Liveness probe. Providers are not contacted.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "nuvora-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
