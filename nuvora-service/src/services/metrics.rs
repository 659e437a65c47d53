//! Metrics collection for nuvora-service.
//!
//! HTTP request metrics flow through the `metrics` facade into the
//! Prometheus recorder; provider call outcomes live in a dedicated registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static PROVIDER_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Install the Prometheus recorder and provider registry. Safe to call more than once.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
        }
    }

    let registry = Registry::new();

    let provider_calls = match IntCounterVec::new(
        Opts::new(
            "nuvora_provider_calls_total",
            "Total completion provider calls by provider and outcome",
        ),
        &["provider", "outcome"],
    ) {
        Ok(counter) => counter,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create nuvora_provider_calls_total");
            return;
        }
    };

    if let Err(e) = registry.register(Box::new(provider_calls.clone())) {
        tracing::warn!(error = %e, "Failed to register nuvora_provider_calls_total");
        return;
    }

    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = PROVIDER_CALLS_TOTAL.set(provider_calls);
}

pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record one provider call outcome: `ok`, `upstream_error`, `transport_error` or `malformed`.
pub fn record_provider_call(provider: &str, outcome: &str) {
    if let Some(counter) = PROVIDER_CALLS_TOTAL.get() {
        counter.with_label_values(&[provider, outcome]).inc();
    }
}
