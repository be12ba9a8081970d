// src/sentiment.rs
//! Lexicon-based polarity/subjectivity scorer.
//!
//! Every lexicon hit is one assessment. An intensifier directly before a hit scales
//! it ("very good"), a negator within the previous 3 tokens flips and halves its
//! polarity ("not good"). The score is the mean over all assessments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

const EMBEDDED: &str = include_str!("../data/sentiment_lexicon.json");

/// Polarity multiplier applied to a negated assessment.
const NEGATION_FACTOR: f64 = -0.5;
/// How many preceding tokens a negator reaches.
const NEGATION_WINDOW: usize = 3;

/// Polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Both components rounded to 2 decimals.
    pub fn rounded(self) -> Self {
        Self {
            polarity: round2(self.polarity),
            subjectivity: round2(self.subjectivity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
}

#[derive(Deserialize)]
struct LexiconFile {
    words: HashMap<String, [f64; 2]>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, Entry>,
    intensifiers: HashMap<String, f64>,
}

impl Lexicon {
    pub fn embedded() -> Result<Self, AnalysisError> {
        Self::from_json_str(EMBEDDED)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AnalysisError> {
        let raw = fs::read_to_string(path).map_err(|source| AnalysisError::ResourceIo {
            what: "sentiment lexicon",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AnalysisError> {
        let file: LexiconFile =
            serde_json::from_str(raw).map_err(|e| AnalysisError::format("sentiment lexicon", e))?;

        let mut words = HashMap::with_capacity(file.words.len());
        for (word, [polarity, subjectivity]) in file.words {
            if !(-1.0..=1.0).contains(&polarity) || !(0.0..=1.0).contains(&subjectivity) {
                return Err(AnalysisError::format(
                    "sentiment lexicon",
                    format!("entry '{word}' out of range ({polarity}, {subjectivity})"),
                ));
            }
            words.insert(
                word.to_lowercase(),
                Entry {
                    polarity,
                    subjectivity,
                },
            );
        }

        let mut intensifiers = HashMap::with_capacity(file.intensifiers.len());
        for (word, factor) in file.intensifiers {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(AnalysisError::format(
                    "sentiment lexicon",
                    format!("intensifier '{word}' has invalid factor {factor}"),
                ));
            }
            intensifiers.insert(word.to_lowercase(), factor);
        }

        Ok(Self {
            words,
            intensifiers,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Score pre-lowercased tokens.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Sentiment {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessments = 0usize;

        for (i, tok) in tokens.iter().enumerate() {
            let Some(entry) = self.lexicon.words.get(tok.as_ref()) else {
                continue;
            };
            let mut p = entry.polarity;
            let mut s = entry.subjectivity;

            if i > 0 {
                if let Some(factor) = self.lexicon.intensifiers.get(tokens[i - 1].as_ref()) {
                    p = (p * factor).clamp(-1.0, 1.0);
                    s = (s * factor).clamp(0.0, 1.0);
                }
            }

            let negated =
                (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(tokens[i - k].as_ref()));
            if negated {
                p *= NEGATION_FACTOR;
            }

            polarity_sum += p;
            subjectivity_sum += s;
            assessments += 1;
        }

        if assessments == 0 {
            return Sentiment::default();
        }
        let n = assessments as f64;
        Sentiment {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "n't" | "n\u{2019}t" | "cannot" | "without" | "nor" | "neither"
    )
}

fn round2(x: f64) -> f64 {
    let r = (x * 100.0).round() / 100.0;
    // avoid serializing "-0.0"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
