use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{provider} API failed: {details}")]
    Upstream {
        provider: &'static str,
        details: String,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// First human-readable message attached to any failed field.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation error".to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<String>,
        }

        let (status, error, details, message) = match self {
            AppError::ValidationError(err) => (
                StatusCode::BAD_REQUEST,
                first_validation_message(&err),
                None,
                None,
            ),
            AppError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body".to_string(),
                Some(msg),
                None,
            ),
            AppError::Upstream { provider, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{} API failed", provider),
                Some(details),
                None,
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error".to_string(),
                None,
                Some(err.to_string()),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error,
                details,
                message,
            }),
        )
            .into_response()
    }
}
