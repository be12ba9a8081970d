// src/config/analyzer.rs
//! Analyzer settings (TOML), with env overrides.
//!
//! Resolution:
//! 1) $ANALYZER_CONFIG_PATH (must exist)
//! 2) config/analyzer.toml (optional; built-in defaults when absent)
//!
//! `ANALYZER_TOP_WORDS` overrides `top_words_limit` when it parses as a positive integer.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ANALYZER_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_TOP_WORDS_LIMIT: usize = 5;

pub const ENV_ANALYZER_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_ANALYZER_TOP_WORDS: &str = "ANALYZER_TOP_WORDS";

fn default_top_words_limit() -> usize {
    DEFAULT_TOP_WORDS_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Maximum number of entries in `top_words`.
    #[serde(default = "default_top_words_limit")]
    pub top_words_limit: usize,
    /// Replacement stopword list (one word per line, `#` comments).
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
    /// Replacement sentiment lexicon (same JSON shape as the embedded one).
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_words_limit: DEFAULT_TOP_WORDS_LIMIT,
            stopwords_path: None,
            lexicon_path: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing analyzer config {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: AnalyzerConfig = toml::from_str(s)?;
        if cfg.top_words_limit == 0 {
            bail!("top_words_limit must be at least 1");
        }
        Ok(cfg)
    }

    /// Load using env var + fallback, then apply env overrides.
    pub fn from_env() -> Result<Self> {
        let mut cfg = match std::env::var(ENV_ANALYZER_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    bail!(
                        "{ENV_ANALYZER_CONFIG_PATH} points to non-existent path {}",
                        pb.display()
                    );
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let default = PathBuf::from(DEFAULT_ANALYZER_CONFIG_PATH);
                if default.exists() {
                    Self::load_from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(n) = parse_limit_env(std::env::var(ENV_ANALYZER_TOP_WORDS).ok()) {
            cfg.top_words_limit = n;
        }
        Ok(cfg)
    }
}

// positive integers only; anything else is ignored
fn parse_limit_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn defaults_fill_missing_keys() {
        let cfg = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());

        let cfg = AnalyzerConfig::from_toml_str("top_words_limit = 3").unwrap();
        assert_eq!(cfg.top_words_limit, 3);
        assert!(cfg.stopwords_path.is_none());
    }

    #[test]
    fn rejects_zero_limit_and_unknown_keys() {
        assert!(AnalyzerConfig::from_toml_str("top_words_limit = 0").is_err());
        assert!(AnalyzerConfig::from_toml_str("top_n = 3").is_err());
    }

    #[test]
    fn limit_env_parsing() {
        assert_eq!(parse_limit_env(Some(" 7 ".into())), Some(7));
        assert_eq!(parse_limit_env(Some("0".into())), None);
        assert_eq!(parse_limit_env(Some("-2".into())), None);
        assert_eq!(parse_limit_env(Some("many".into())), None);
        assert_eq!(parse_limit_env(None), None);
    }

    #[serial_test::serial]
    #[test]
    fn from_env_uses_explicit_path_then_default() {
        // Isolate CWD so the repo's own config/ does not interfere
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_ANALYZER_CONFIG_PATH);
        env::remove_var(ENV_ANALYZER_TOP_WORDS);

        // No file anywhere -> defaults
        assert_eq!(AnalyzerConfig::from_env().unwrap(), AnalyzerConfig::default());

        // Default location is picked up
        fs::create_dir_all(tmp.path().join("config")).unwrap();
        fs::write(
            tmp.path().join(DEFAULT_ANALYZER_CONFIG_PATH),
            "top_words_limit = 2\n",
        )
        .unwrap();
        assert_eq!(AnalyzerConfig::from_env().unwrap().top_words_limit, 2);

        // Explicit path wins, env override wins over file
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "top_words_limit = 4\n").unwrap();
        env::set_var(ENV_ANALYZER_CONFIG_PATH, explicit.display().to_string());
        assert_eq!(AnalyzerConfig::from_env().unwrap().top_words_limit, 4);
        env::set_var(ENV_ANALYZER_TOP_WORDS, "9");
        assert_eq!(AnalyzerConfig::from_env().unwrap().top_words_limit, 9);

        // Explicit path that does not exist is an error
        env::set_var(ENV_ANALYZER_CONFIG_PATH, tmp.path().join("nope.toml"));
        assert!(AnalyzerConfig::from_env().is_err());

        env::remove_var(ENV_ANALYZER_CONFIG_PATH);
        env::remove_var(ENV_ANALYZER_TOP_WORDS);
        env::set_current_dir(&old).unwrap();
    }
}
