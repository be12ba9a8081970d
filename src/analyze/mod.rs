// src/analyze/mod.rs
//! Analysis entry: text -> counts, sentiment and top words.
//!
//! The linguistic resources (stopwords, lexicon) are loaded once per process and
//! only read afterwards, so a single `TextAnalyzer` is shared by all requests.

pub mod frequency;
pub mod stopwords;
pub mod tokenize;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::sentiment::{Lexicon, Sentiment, SentimentAnalyzer};

pub use frequency::TopWords;
pub use stopwords::Stopwords;

static SHARED: OnceCell<TextAnalyzer> = OnceCell::new();

/// Result returned by `/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub sentiment: Sentiment,
    pub top_words: TopWords,
}

#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    stopwords: Stopwords,
    sentiment: SentimentAnalyzer,
    top_words_limit: usize,
}

impl TextAnalyzer {
    pub fn new(stopwords: Stopwords, lexicon: Lexicon, top_words_limit: usize) -> Self {
        Self {
            stopwords,
            sentiment: SentimentAnalyzer::new(lexicon),
            top_words_limit,
        }
    }

    /// Built-in resources, default limit.
    pub fn embedded() -> Result<Self, AnalysisError> {
        Self::from_config(&AnalyzerConfig::default())
    }

    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        let stopwords = match &cfg.stopwords_path {
            Some(p) => Stopwords::load_from_file(p)?,
            None => Stopwords::embedded(),
        };
        let lexicon = match &cfg.lexicon_path {
            Some(p) => Lexicon::load_from_file(p)?,
            None => Lexicon::embedded()?,
        };
        Ok(Self::new(stopwords, lexicon, cfg.top_words_limit.max(1)))
    }

    pub fn top_words_limit(&self) -> usize {
        self.top_words_limit
    }

    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let words = tokenize::words(text);
        let sentence_count = tokenize::sentences(text).len();
        let paragraph_count = tokenize::paragraphs(text).len();

        // Lowercased once, shared by sentiment and frequency ranking
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let sentiment = self.sentiment.score_tokens(&lowered).rounded();
        let top_words = frequency::top_words(
            lowered.iter().map(String::as_str),
            &self.stopwords,
            self.top_words_limit,
        );

        Ok(AnalysisResult {
            word_count: words.len(),
            sentence_count,
            paragraph_count,
            sentiment,
            top_words,
        })
    }
}

/// Process-wide analyzer, initialized on first use from `AnalyzerConfig::from_env`.
///
/// A failed initialization is returned to the caller and retried on the next call.
pub fn shared() -> Result<&'static TextAnalyzer, AnalysisError> {
    SHARED.get_or_try_init(|| {
        let cfg =
            AnalyzerConfig::from_env().map_err(|e| AnalysisError::Config(format!("{e:#}")))?;
        let analyzer = TextAnalyzer::from_config(&cfg)?;
        info!(
            target: "analyze",
            stopwords = analyzer.stopwords.len(),
            lexicon = analyzer.sentiment.lexicon_len(),
            top_words_limit = analyzer.top_words_limit,
            "linguistic resources loaded"
        );
        Ok(analyzer)
    })
}

/// Analyze with the shared analyzer.
pub fn analyze_text(text: &str) -> Result<AnalysisResult, AnalysisError> {
    shared()?.analyze(text)
}
