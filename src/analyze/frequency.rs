// src/analyze/frequency.rs
//! Frequency ranking of content words.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::stopwords::Stopwords;

/// Ranked `(word, count)` pairs. Serializes as a JSON object in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopWords(Vec<(String, usize)>);

impl TopWords {
    pub fn entries(&self) -> &[(String, usize)] {
        &self.0
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TopWords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Case-fold, keep purely alphanumeric tokens, drop stopwords, tally, rank.
///
/// Ties keep first-seen order (stable sort over discovery order).
pub fn top_words<'a, I>(tokens: I, stopwords: &Stopwords, limit: usize) -> TopWords
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        if token.is_empty() || !token.chars().all(char::is_alphanumeric) {
            continue;
        }
        let word = token.to_lowercase();
        if stopwords.contains(&word) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(word.clone(), tally.len());
                tally.push((word, 1));
            }
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);
    TopWords(tally)
}
