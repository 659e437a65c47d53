//! Groq chat-completions provider.
//!
//! OpenAI-compatible endpoint authenticated with a bearer token.

use super::{
    chat_completion_text, CompletionProvider, ProviderError, ProviderResponse,
    CHAT_COMPLETION_PATH,
};
use crate::config::GroqConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use service_core::observability::TracedClientExt;
use std::time::Duration;

pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    pub fn new(config: GroqConfig, timeout: Duration) -> Result<Self, ProviderError> {
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
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "Groq"
    }

    async fn send(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .traced_post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ProviderResponse { status, body })
    }

    fn extract_text(&self, body: &serde_json::Value) -> Option<String> {
        chat_completion_text(body)
    }

    fn extraction_path(&self) -> &'static str {
        CHAT_COMPLETION_PATH
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}
