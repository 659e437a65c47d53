//! Mock provider for testing.

use super::{
    chat_completion_text, generate_content_text, CompletionProvider, ProviderError,
    ProviderResponse, CHAT_COMPLETION_PATH, GENERATE_CONTENT_PATH,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Which reply envelope the mock imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `choices[0].message.content`
    ChatCompletion,
    /// `candidates[0].content.parts[0].text`
    GenerateContent,
}

/// Canned-reply provider that records every prompt it receives.
pub struct MockProvider {
    name: &'static str,
    envelope: Envelope,
    status: StatusCode,
    body: String,
    call_count: AtomicU64,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    pub fn new(name: &'static str, envelope: Envelope, status: StatusCode, body: &str) -> Self {
        Self {
            name,
            envelope,
            status,
            body: body.to_string(),
            call_count: AtomicU64::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn groq(status: StatusCode, body: &str) -> Self {
        Self::new("Groq", Envelope::ChatCompletion, status, body)
    }

    pub fn gemini(status: StatusCode, body: &str) -> Self {
        Self::new("Gemini", Envelope::GenerateContent, status, body)
    }

    /// 200 with `{"choices":[{"message":{"content": text}}]}`.
    pub fn groq_reply(text: &str) -> Self {
        let body = serde_json::json!({ "choices": [{ "message": { "content": text } }] });
        Self::groq(StatusCode::OK, &body.to_string())
    }

    /// 200 with `{"candidates":[{"content":{"parts":[{"text": text}]}}]}`.
    pub fn gemini_reply(text: &str) -> Self {
        let body =
            serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] });
        Self::gemini(StatusCode::OK, &body.to_string())
    }

    pub fn groq_failure(status: StatusCode, body: &str) -> Self {
        Self::groq(status, body)
    }

    pub fn gemini_failure(status: StatusCode, body: &str) -> Self {
        Self::gemini(status, body)
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn send(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        tracing::debug!(
            provider = self.name,
            prompt_len = prompt.len(),
            "[MOCK] completion requested"
        );

        Ok(ProviderResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }

    fn extract_text(&self, body: &serde_json::Value) -> Option<String> {
        match self.envelope {
            Envelope::ChatCompletion => chat_completion_text(body),
            Envelope::GenerateContent => generate_content_text(body),
        }
    }

    fn extraction_path(&self) -> &'static str {
        match self.envelope {
            Envelope::ChatCompletion => CHAT_COMPLETION_PATH,
            Envelope::GenerateContent => GENERATE_CONTENT_PATH,
        }
    }
}
