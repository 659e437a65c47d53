//! Gemini provider implementation.
//!
//! Calls `models/{model}:generateContent` with the API key passed as the
//! `key` query parameter.

use super::{
    generate_content_text, CompletionProvider, ProviderError, ProviderResponse,
    GENERATE_CONTENT_PATH,
};
use crate::config::GeminiConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use service_core::observability::TracedClientExt;
use std::time::Duration;

/// Gemini text provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ProviderError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn is_configured(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
    }

    /// Build the API URL for the given method. The key is attached separately.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn send(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .traced_post(&url)
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ProviderResponse { status, body })
    }

    fn extract_text(&self, body: &serde_json::Value) -> Option<String> {
        generate_content_text(body)
    }

    fn extraction_path(&self) -> &'static str {
        GENERATE_CONTENT_PATH
    }
}

// ============================================================================
// Gemini API Request Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn provider(api_base: &str) -> GeminiProvider {
        GeminiProvider::new(
            GeminiConfig {
                api_key: Secret::new("k".to_string()),
                api_base: api_base.to_string(),
                model: "gemini-2.0-flash".to_string(),
            },
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn api_url_targets_model_method() {
        let provider = provider("https://generativelanguage.googleapis.com/v1beta/");

        assert_eq!(
            provider.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn request_body_is_single_part() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }
}
