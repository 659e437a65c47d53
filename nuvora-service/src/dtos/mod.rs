//! Request and response bodies for the HTTP surface.
//!
//! Request fields are trimmed while deserializing; a missing or `null` field
//! reads as an empty string so it fails validation like a blank one.

use axum::extract::FromRequest;
use serde::{Deserialize, Deserializer, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// `Json` extractor whose rejection renders as an [`AppError`] payload.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).unwrap_or_default())
}

#[derive(Debug, Deserialize, Validate)]
pub struct SummaryRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "No text provided"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CorrectionRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "No sentence provided"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "No input text provided"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReminderRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Missing goal or time"))]
    pub goal: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Missing goal or time"))]
    pub time: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConversationRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "No message provided"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct CorrectionResponse {
    pub correction: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
}

#[derive(Debug, Serialize)]
pub struct InspirationResponse {
    pub inspiration: String,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub response: String,
}
