#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use nuvora_service::services::{CompletionProvider, MockProvider};
use nuvora_service::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const CHAT_REPLY: &str = r#"{"choices":[{"message":{"content":"X"}}]}"#;
pub const CONTENT_REPLY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"Y"}]}}]}"#;

/// Drives a router in-process with `oneshot`.
#[derive(Clone)]
pub struct RouterClient {
    pub router: Router,
}

/// In-process router backed by mock providers.
pub struct TestApp {
    pub client: RouterClient,
    pub groq: Arc<MockProvider>,
    pub gemini: Arc<MockProvider>,
}

impl TestApp {
    pub fn new(groq: MockProvider, gemini: MockProvider) -> Self {
        let groq = Arc::new(groq);
        let gemini = Arc::new(gemini);
        let groq_provider: Arc<dyn CompletionProvider> = groq.clone();
        let gemini_provider: Arc<dyn CompletionProvider> = gemini.clone();

        Self {
            client: RouterClient {
                router: build_router(AppState::new(groq_provider, gemini_provider)),
            },
            groq,
            gemini,
        }
    }

    /// Both providers answer 200 with the canonical `X` / `Y` envelopes.
    pub fn with_default_replies() -> Self {
        Self::new(
            MockProvider::groq(StatusCode::OK, CHAT_REPLY),
            MockProvider::gemini(StatusCode::OK, CONTENT_REPLY),
        )
    }

    pub fn total_calls(&self) -> u64 {
        self.groq.call_count() + self.gemini.call_count()
    }

    pub fn router(&self) -> Router {
        self.client.router.clone()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.client.get(uri).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.client.post_json(uri, body).await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.client.post_raw(uri, content_type, body).await
    }
}

impl RouterClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.post_raw(uri, "application/json", &body.to_string()).await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}
