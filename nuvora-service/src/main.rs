use nuvora_service::config::NuvoraConfig;
use nuvora_service::services::metrics::init_metrics;
use nuvora_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = NuvoraConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "nuvora-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    application.run_until_stopped().await
}
