//! Completion provider abstractions and implementations.
//!
//! Each provider performs one outbound call per prompt and hands back the raw
//! status and body. Interpreting the reply is left to [`complete`], so every
//! route maps upstream failures the same way.

pub mod gemini;
pub mod groq;
pub mod mock;

use crate::services::metrics::record_provider_call;
use async_trait::async_trait;
use metrics::histogram;
use reqwest::StatusCode;
use service_core::error::AppError;
use std::time::Instant;
use thiserror::Error;

/// Transport-level failure talking to a provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_body() || err.is_decode() {
            ProviderError::Body(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}

/// Raw provider reply, uninterpreted.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProviderResponse {
    /// Only a plain 200 counts; any other status, 2xx included, is an upstream failure.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Label used in error payloads, e.g. "Groq API failed".
    fn name(&self) -> &'static str;

    /// Send one prompt and return the raw reply.
    async fn send(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Pull the generated text out of a successful reply envelope.
    fn extract_text(&self, body: &serde_json::Value) -> Option<String>;

    /// Human-readable extraction path, for error messages.
    fn extraction_path(&self) -> &'static str;
}

pub const CHAT_COMPLETION_PATH: &str = "choices[0].message.content";
pub const GENERATE_CONTENT_PATH: &str = "candidates[0].content.parts[0].text";

/// `choices[0].message.content`
pub fn chat_completion_text(body: &serde_json::Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// `candidates[0].content.parts[0].text`
pub fn generate_content_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Send `prompt` to `provider` and return the generated text.
///
/// Any status other than 200 becomes [`AppError::Upstream`] carrying the raw body.
/// Transport failures, malformed JSON and a missing extraction path become
/// [`AppError::InternalError`].
pub async fn complete(provider: &dyn CompletionProvider, prompt: &str) -> Result<String, AppError> {
    let name = provider.name();

    let started = Instant::now();
    let sent = provider.send(prompt).await;
    histogram!("provider_request_duration_seconds", "provider" => name)
        .record(started.elapsed().as_secs_f64());

    let response = sent.map_err(|e| {
        record_provider_call(name, "transport_error");
        tracing::error!(provider = name, error = %e, "Provider request failed");
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    if !response.is_ok() {
        record_provider_call(name, "upstream_error");
        tracing::warn!(
            provider = name,
            status = %response.status,
            "Provider returned error status"
        );
        return Err(AppError::Upstream {
            provider: name,
            details: response.body,
        });
    }

    let body: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
        record_provider_call(name, "malformed");
        tracing::error!(provider = name, error = %e, "Provider returned malformed JSON");
        AppError::InternalError(anyhow::anyhow!("Failed to parse {} response: {}", name, e))
    })?;

    match provider.extract_text(&body) {
        Some(text) => {
            record_provider_call(name, "ok");
            Ok(text)
        }
        None => {
            record_provider_call(name, "malformed");
            tracing::error!(
                provider = name,
                path = provider.extraction_path(),
                "Provider response missing expected field"
            );
            Err(AppError::InternalError(anyhow::anyhow!(
                "{} response missing {}",
                name,
                provider.extraction_path()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProvider;
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_completion_path() {
        let body = json!({ "choices": [{ "message": { "content": "X" } }] });
        assert_eq!(chat_completion_text(&body), Some("X".to_string()));
        assert_eq!(chat_completion_text(&json!({ "choices": [] })), None);
        assert_eq!(
            chat_completion_text(&json!({ "choices": [{ "message": { "content": 7 } }] })),
            None
        );
    }

    #[test]
    fn generate_content_path() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "Y" }] } }] });
        assert_eq!(generate_content_text(&body), Some("Y".to_string()));
        assert_eq!(
            generate_content_text(&json!({ "candidates": [{ "content": { "parts": [] } }] })),
            None
        );
    }

    #[tokio::test]
    async fn complete_returns_extracted_text() {
        let provider = MockProvider::gemini_reply("hello there");
        let text = complete(&provider, "prompt").await.unwrap();
        assert_eq!(text, "hello there");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_prompt().as_deref(), Some("prompt"));
    }

    #[tokio::test]
    async fn complete_maps_error_status_to_upstream() {
        let provider = MockProvider::groq_failure(StatusCode::UNAUTHORIZED, "invalid api key");
        let err = complete(&provider, "prompt").await.unwrap_err();
        match err {
            AppError::Upstream { provider, details } => {
                assert_eq!(provider, "Groq");
                assert_eq!(details, "invalid api key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn complete_treats_other_2xx_as_upstream_failure() {
        let provider = MockProvider::gemini(StatusCode::ACCEPTED, r#"{"name":"operations/1"}"#);
        let err = complete(&provider, "prompt").await.unwrap_err();
        match err {
            AppError::Upstream { provider, details } => {
                assert_eq!(provider, "Gemini");
                assert_eq!(details, r#"{"name":"operations/1"}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn complete_rejects_unexpected_envelope() {
        let provider = MockProvider::gemini(StatusCode::OK, r#"{"candidates":[]}"#);
        let err = complete(&provider, "prompt").await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
        assert!(err.to_string().contains("candidates[0].content.parts[0].text"));
    }

    #[tokio::test]
    async fn complete_rejects_non_json_body() {
        let provider = MockProvider::groq(StatusCode::OK, "<html>oops</html>");
        let err = complete(&provider, "prompt").await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
