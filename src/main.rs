//! Text statistics service — binary entrypoint.
//! Boots the Axum HTTP server with the analyzer resources already loaded.

use shuttle_axum::ShuttleAxum;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_stats_analyzer::metrics::Metrics;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - ANALYZER_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("ANALYZER_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("analyze=debug,text_stats_analyzer=info,warn"));

    // The runtime may already have installed a subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    // Resources must be usable before the first request.
    let analyzer = text_stats_analyzer::bootstrap()
        .map_err(|e| shuttle_runtime::Error::Custom(anyhow::Error::new(e)))?;

    let mut router = text_stats_analyzer::router();
    match Metrics::init(analyzer.top_words_limit()) {
        Ok(metrics) => router = router.merge(metrics.router()),
        Err(e) => warn!(error = %e, "metrics recorder not installed; /metrics disabled"),
    }

    Ok(router.into())
}
