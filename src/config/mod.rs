// src/config/mod.rs
pub mod analyzer;

pub use analyzer::{
    AnalyzerConfig, DEFAULT_ANALYZER_CONFIG_PATH, DEFAULT_TOP_WORDS_LIMIT,
    ENV_ANALYZER_CONFIG_PATH, ENV_ANALYZER_TOP_WORDS,
};
