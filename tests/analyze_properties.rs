// tests/analyze_properties.rs
//
// Randomized (seeded) checks of the invariants every AnalysisResult must satisfy.

use rand::{rngs::StdRng, Rng, SeedableRng};

use text_stats_analyzer::analyze::Stopwords;
use text_stats_analyzer::{AnalysisResult, TextAnalyzer};

const VOCAB: &[&str] = &[
    "the", "The", "is", "a", "river", "River", "good", "not", "very", "bad", "sunny", "days",
    "happy", "don't", "Mr.", "Smith", "42", "e-mail", "café", "terrible", "and", "I",
];
const PUNCT: &[&str] = &[".", "!", "?", ",", ";", "...", ""];

fn random_text(rng: &mut StdRng) -> String {
    let mut out = String::new();
    let n = rng.random_range(0..40);
    for _ in 0..n {
        out.push_str(VOCAB[rng.random_range(0..VOCAB.len())]);
        if rng.random_bool(0.3) {
            out.push_str(PUNCT[rng.random_range(0..PUNCT.len())]);
        }
        match rng.random_range(0..10) {
            0 => out.push('\n'),
            1 => out.push_str("\n\n"),
            _ => out.push(' '),
        }
    }
    out
}

fn is_rounded(x: f64) -> bool {
    (x * 100.0).round() / 100.0 == x
}

fn check_invariants(text: &str, r: &AnalysisResult, stopwords: &Stopwords) {
    let p = r.sentiment.polarity;
    let s = r.sentiment.subjectivity;
    assert!((-1.0..=1.0).contains(&p), "polarity {p} for {text:?}");
    assert!((0.0..=1.0).contains(&s), "subjectivity {s} for {text:?}");
    assert!(is_rounded(p) && is_rounded(s), "not rounded: {p} {s}");
    // sentences never span a line break
    assert!(
        r.sentence_count >= r.paragraph_count,
        "{} sentences < {} paragraphs for {text:?}",
        r.sentence_count,
        r.paragraph_count
    );

    let top = r.top_words.entries();
    assert!(top.len() <= 5);
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1), "not sorted: {top:?}");
    for (word, count) in top {
        assert!(*count >= 1);
        assert!(!stopwords.contains(word), "stopword {word} ranked");
        assert_eq!(word, &word.to_lowercase());
        assert!(word.chars().all(char::is_alphanumeric));
    }

    if text.trim().is_empty() {
        assert_eq!(r.word_count, 0);
        assert_eq!(r.sentence_count, 0);
        assert_eq!(r.paragraph_count, 0);
        assert!(top.is_empty());
    } else {
        assert!(r.word_count >= 1, "{text:?}");
        assert!(r.sentence_count >= 1, "{text:?}");
        assert!(r.paragraph_count >= 1, "{text:?}");
    }
}

#[test]
fn random_inputs_satisfy_invariants_and_are_idempotent() {
    let analyzer = TextAnalyzer::embedded().expect("embedded resources");
    let stopwords = Stopwords::embedded();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..300 {
        let text = random_text(&mut rng);
        let first = analyzer.analyze(&text).expect("analyze");
        check_invariants(&text, &first, &stopwords);

        let second = analyzer.analyze(&text).expect("analyze again");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn case_variants_are_counted_together() {
    let analyzer = TextAnalyzer::embedded().unwrap();
    let r = analyzer.analyze("River river RIVER. The the THE.").unwrap();
    assert_eq!(r.top_words.entries(), &[("river".to_string(), 3)]);
}

#[test]
fn custom_stopword_file_replaces_builtin_list() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("stop.txt");
    std::fs::write(&path, "sunny\n").unwrap();

    let cfg = text_stats_analyzer::config::AnalyzerConfig {
        stopwords_path: Some(path),
        ..Default::default()
    };
    let analyzer = TextAnalyzer::from_config(&cfg).unwrap();
    let r = analyzer.analyze("the sunny days").unwrap();
    assert!(r.top_words.get("sunny").is_none());
    assert_eq!(r.top_words.get("the"), Some(1));
    assert_eq!(r.top_words.get("days"), Some(1));
}

#[test]
fn shared_analyzer_matches_fresh_instance() {
    let text = "Mr. Smith isn't happy.\nThe weather is terrible today.";
    let shared = text_stats_analyzer::analyze_text(text).expect("shared analyzer");
    let fresh = TextAnalyzer::embedded().unwrap().analyze(text).unwrap();
    assert_eq!(shared, fresh);
    assert_eq!(shared.sentence_count, 2);
    assert_eq!(shared.paragraph_count, 2);
}
