// src/analyze/stopwords.rs
//! English stopword set from the `stop-words` crate (NLTK list), replaceable from a file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};

use crate::error::AnalysisError;

#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// NLTK English list.
    pub fn embedded() -> Self {
        let words = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_string().to_lowercase())
            .collect();
        Self { words }
    }

    /// Replacement list: one word per line; blank lines and `#` comments are ignored.
    pub fn load_from_file(path: &Path) -> Result<Self, AnalysisError> {
        let content = fs::read_to_string(path).map_err(|source| AnalysisError::ResourceIo {
            what: "stopword list",
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(AnalysisError::format(
                "stopword list",
                format!("{} contains no words", path.display()),
            ));
        }
        Ok(list)
    }

    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Expects an already case-folded word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_has_common_function_words() {
        let sw = Stopwords::embedded();
        for w in ["the", "is", "a", "and", "me", "then", "we"] {
            assert!(sw.contains(w), "{w} should be a stopword");
        }
        assert!(!sw.contains("sunny"));
        assert!(!sw.contains("The"));
        assert!(sw.len() >= 150, "unexpectedly short list: {}", sw.len());
    }

    #[test]
    fn parse_folds_case_and_skips_comments() {
        let sw = Stopwords::parse("# header\n\n  Foo \nBAR\n");
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("foo"));
        assert!(sw.contains("bar"));
    }

    #[test]
    fn missing_or_empty_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.txt");
        assert!(matches!(
            Stopwords::load_from_file(&missing),
            Err(AnalysisError::ResourceIo { .. })
        ));

        let empty = tmp.path().join("empty.txt");
        std::fs::write(&empty, "# nothing\n").unwrap();
        assert!(matches!(
            Stopwords::load_from_file(&empty),
            Err(AnalysisError::ResourceFormat { .. })
        ));
    }
}
