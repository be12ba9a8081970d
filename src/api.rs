// src/api.rs
//! HTTP surface: static page, health check and `POST /analyze`.

use std::time::Instant;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, error};

use crate::analyze::{analyze_text, AnalysisResult};
use crate::error::AnalysisError;
use crate::metrics::{self, Outcome};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Characters of input echoed into failure logs.
const LOG_PREFIX_CHARS: usize = 40;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .layer(CorsLayer::very_permissive())
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    pub text: String,
}

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    Analysis(AnalysisError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn outcome(&self) -> Outcome {
        match self {
            ApiError::InvalidRequest(_) => Outcome::Invalid,
            ApiError::Analysis(_) => Outcome::Error,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        ApiError::InvalidRequest(rej.body_text())
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        ApiError::Analysis(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Analysis(e) => e.to_string(),
        };
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn analyze(
    payload: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let started = Instant::now();
    let result = run_analyze(payload);
    let outcome = match &result {
        Ok(_) => Outcome::Ok,
        Err(e) => e.outcome(),
    };
    metrics::record_request(outcome, started.elapsed().as_secs_f64() * 1000.0);
    result.map(Json)
}

fn run_analyze(
    payload: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<AnalysisResult, ApiError> {
    let Json(req) = payload.map_err(|rej| {
        // client mistake, not a server fault
        debug!(target: "analyze", status = %rej.status(), reason = %rej.body_text(), "rejected request");
        ApiError::from(rej)
    })?;

    let id = anon_hash(&req.text);
    match analyze_text(&req.text) {
        Ok(res) => {
            debug!(
                target: "analyze",
                %id,
                words = res.word_count,
                sentences = res.sentence_count,
                paragraphs = res.paragraph_count,
                "analysis complete"
            );
            Ok(res)
        }
        Err(e) => {
            error!(
                target: "analyze",
                %id,
                prefix = %input_prefix(&req.text, LOG_PREFIX_CHARS),
                error = ?e,
                "analysis failed"
            );
            Err(e.into())
        }
    }
}

/// Short stable id for correlating log lines without logging the full text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    Sha256::digest(text.as_bytes())[..6]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn input_prefix(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().nth(max_chars).is_some() {
        out.push('…');
    }
    out
}
