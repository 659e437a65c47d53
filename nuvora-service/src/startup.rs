//! Application startup and lifecycle management.
//!
//! Builds the providers from configuration, wires the router with the shared
//! middleware stack, and serves it until a shutdown signal arrives.

use crate::config::NuvoraConfig;
use crate::handlers;
use crate::services::{CompletionProvider, GeminiProvider, GroqProvider};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completions provider: summarize, quiz.
    pub groq: Arc<dyn CompletionProvider>,
    /// generateContent provider: language-correct, daily-inspiration, reminder and
    /// conversation-prompt.
    pub gemini: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(groq: Arc<dyn CompletionProvider>, gemini: Arc<dyn CompletionProvider>) -> Self {
        Self { groq, gemini }
    }

    /// Build the live providers from configuration.
    pub fn from_config(config: &NuvoraConfig) -> Result<Self, AppError> {
        let groq = GroqProvider::new(config.groq.clone(), config.provider_timeout)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;
        if groq.is_configured() {
            tracing::info!(model = %config.groq.model, "Initialized Groq provider");
        } else {
            tracing::warn!("GROQ_API_KEY not set - summarize and quiz will fail upstream");
        }

        let gemini = GeminiProvider::new(config.gemini.clone(), config.provider_timeout)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;
        if gemini.is_configured() {
            tracing::info!(model = %config.gemini.model, "Initialized Gemini provider");
        } else {
            tracing::warn!("GEMINI_API_KEY not set - Gemini-backed routes will fail upstream");
        }

        Ok(Self::new(Arc::new(groq), Arc::new(gemini)))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/summarize", post(handlers::summarize))
        .route("/language-correct", post(handlers::language_correct))
        .route("/quiz", post(handlers::quiz))
        .route("/daily-inspiration", get(handlers::daily_inspiration))
        .route("/reminder", post(handlers::reminder))
        .route("/conversation-prompt", post(handlers::conversation_prompt))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost so the id is set before the trace span reads it
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with live providers.
    pub async fn build(config: NuvoraConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        Self::build_with_state(config, state).await
    }

    /// Build the application around caller-supplied providers.
    pub async fn build_with_state(config: NuvoraConfig, state: AppState) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let address = config.common.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Nuvora service: HTTP on {}:{}", config.common.host, port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
