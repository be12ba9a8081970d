// src/error.rs
//! Errors raised by the analysis core.
//!
//! The core never maps these to transport concerns; `api::ApiError` owns the
//! translation into HTTP status codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A linguistic resource (stopword list, lexicon) could not be read.
    #[error("failed to read {what} from {}", path.display())]
    ResourceIo {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A linguistic resource was read but is malformed.
    #[error("malformed {what}: {reason}")]
    ResourceFormat { what: &'static str, reason: String },

    /// Analyzer configuration could not be loaded.
    #[error("analyzer configuration: {0}")]
    Config(String),
}

impl AnalysisError {
    pub(crate) fn format(what: &'static str, reason: impl ToString) -> Self {
        Self::ResourceFormat {
            what,
            reason: reason.to_string(),
        }
    }
}
