// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze_text, AnalysisResult, TextAnalyzer, TopWords};
pub use crate::api::router;
pub use crate::error::AnalysisError;
pub use crate::sentiment::Sentiment;

use tracing::info;

/// Load linguistic resources now instead of on the first request.
///
/// Call from the entrypoint after tracing init; returns the shared analyzer so the
/// caller can read its effective settings.
pub fn bootstrap() -> Result<&'static TextAnalyzer, AnalysisError> {
    let analyzer = analyze::shared()?;
    info!(
        top_words_limit = analyzer.top_words_limit(),
        "text analyzer ready"
    );
    Ok(analyzer)
}
