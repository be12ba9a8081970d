// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const REQUESTS_TOTAL: &str = "analyze_requests_total";
pub const DURATION_MS: &str = "analyze_duration_ms";
pub const TOP_WORDS_LIMIT: &str = "analyzer_top_words_limit";

/// Outcome label for `analyze_requests_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init(top_words_limit: usize) -> anyhow::Result<Self> {
        // Use default buckets to avoid API differences across crate versions.
        let handle = PrometheusBuilder::new().install_recorder()?;

        gauge!(TOP_WORDS_LIMIT).set(top_words_limit as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// No-op until a recorder is installed.
pub fn record_request(outcome: Outcome, elapsed_ms: f64) {
    counter!(REQUESTS_TOTAL, "outcome" => outcome.as_str()).increment(1);
    histogram!(DURATION_MS).record(elapsed_ms);
}
