// src/analyze/tokenize.rs
//! Language-aware segmentation on top of UAX#29 boundaries.
//!
//! Words follow Treebank conventions closely enough for counting: punctuation is its
//! own token, runs of `.` collapse into one token, hyphenated compounds stay whole
//! (`state-of-the-art`), and English clitics are split from their host
//! (`don't` -> `do` + `n't`, `she's` -> `she` + `'s`).
//! Sentences follow UAX#29, except that a boundary on the same line right after a
//! known abbreviation (`Mr.`, `e.g.`) does not end the sentence, nor does one after
//! an uppercase initial that is followed by a name (`J. Doe`).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'s", "\u{2019}s", "'re", "\u{2019}re", "'ve", "\u{2019}ve", "'ll",
    "\u{2019}ll", "'d", "\u{2019}d", "'m", "\u{2019}m",
];

/// Capitalized words that usually open a sentence rather than continue a name.
const EXTRA_SENTENCE_STARTERS: &[&str] = &[
    "next", "however", "still", "yet", "also", "later", "meanwhile", "finally", "first",
    "second", "third", "instead", "otherwise", "therefore", "thus", "hence", "yes", "please",
    "one", "every", "many", "everyone", "nobody", "something", "nothing", "today",
    "tomorrow", "yesterday",
];

static ABBREVIATION_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:^|[\s(\["'])(?:mr|mrs|ms|dr|prof|sr|jr|st|mt|vs|etc|inc|ltd|co|corp|fig|approx|dept|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec|e\.g|i\.e|u\.s|u\.k|a\.m|p\.m)\.$"#,
    )
    .expect("abbreviation regex")
});

// "I" is a pronoun, not an initial.
static INITIAL_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s(\["'])[A-HJ-Z]\.$"#).expect("initial regex"));

static SENTENCE_STARTERS: Lazy<HashSet<String>> = Lazy::new(|| {
    get(LANGUAGE::English)
        .iter()
        .map(|w| w.to_string().to_lowercase())
        .chain(EXTRA_SENTENCE_STARTERS.iter().map(|w| w.to_string()))
        .collect()
});

/// Word tokens in input order, borrowed from `text`.
pub fn words(text: &str) -> Vec<&str> {
    let segs: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, seg)| !seg.chars().all(char::is_whitespace))
        .collect();
    let mut spans: Vec<(usize, usize)> = Vec::new();

    let mut i = 0;
    while i < segs.len() {
        let (start, seg) = segs[i];
        let mut end = start + seg.len();

        // word "-" word ["-" word ...] with no spaces in between
        if is_alnum(seg) {
            while let (Some(&(hs, "-")), Some(&(ns, next))) = (segs.get(i + 1), segs.get(i + 2)) {
                if hs != end || ns != hs + 1 || !is_alnum(next) {
                    break;
                }
                end = ns + next.len();
                i += 2;
            }
            if end != start + seg.len() {
                spans.push((start, end));
                i += 1;
                continue;
            }
        }

        // "..." arrives as three "." segments
        if seg == "." {
            if let Some(last) = spans.last_mut() {
                if last.1 == start && text[last.0..last.1].bytes().all(|b| b == b'.') {
                    last.1 = end;
                    i += 1;
                    continue;
                }
            }
        }

        match clitic_split(seg) {
            Some(at) => {
                spans.push((start, start + at));
                spans.push((start + at, end));
            }
            None => spans.push((start, end)),
        }
        i += 1;
    }

    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Final,
    Abbreviation,
    Initial,
}

/// Sentence spans (trimmed) in input order, borrowed from `text`.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut tail = Tail::Final;

    for (start, seg) in text.split_sentence_bound_indices() {
        let trimmed = seg.trim();
        if trimmed.is_empty() {
            continue;
        }
        let s = start + (seg.len() - seg.trim_start().len());
        let e = s + trimmed.len();

        let joins = match tail {
            Tail::Final => false,
            Tail::Abbreviation => true,
            Tail::Initial => starts_with_name(trimmed),
        };
        match spans.last_mut() {
            Some(last) if joins => last.1 = e,
            _ => spans.push((s, e)),
        }

        let line_break = seg[seg.trim_end().len()..].contains('\n');
        tail = if line_break {
            Tail::Final
        } else if ABBREVIATION_TAIL.is_match(trimmed) {
            Tail::Abbreviation
        } else if INITIAL_TAIL.is_match(trimmed) {
            Tail::Initial
        } else {
            Tail::Final
        };
    }

    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}

/// Newline-delimited segments that are not blank.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').filter(|p| !p.trim().is_empty()).collect()
}

fn is_alnum(seg: &str) -> bool {
    !seg.is_empty() && seg.chars().all(char::is_alphanumeric)
}

/// Capitalized first word that is not a common sentence opener.
fn starts_with_name(sentence: &str) -> bool {
    let first: String = sentence
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    first.chars().next().is_some_and(char::is_uppercase)
        && !SENTENCE_STARTERS.contains(&first.to_lowercase())
}

/// Byte offset where a trailing clitic starts, if `word` carries one.
fn clitic_split(word: &str) -> Option<usize> {
    CLITICS.iter().find_map(|suffix| {
        if word.len() <= suffix.len() {
            return None;
        }
        let at = word.len() - suffix.len();
        (word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(suffix)).then_some(at)
    })
}
