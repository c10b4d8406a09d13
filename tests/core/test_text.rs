//! Tests for the normalization pipeline
//!
//! - Idempotence over mixed input
//! - Digit and punctuation boundaries
//! - Unicode handling

use txtsearch::{CaseMode, TextPipeline, Transform, Transformer};

const SAMPLES: &[&str] = &[
    "The Quick Fox",
    "abc123def",
    "  hello,   WORLD!!  ",
    "can't won't",
    "road-trip_2024",
    "Café NAÏVE",
    "١٢٣ arabic digits",
    "",
    "   ",
    "!!!",
    "Hello 👋 World",
];

#[test]
fn test_normalize_is_idempotent() {
    let pipeline = TextPipeline::production();

    for sample in SAMPLES {
        let once = pipeline.normalize(sample);
        assert_eq!(
            pipeline.normalize(&once),
            once,
            "normalize is not idempotent for {sample:?}"
        );
    }
}

#[test]
fn test_normalized_form_has_no_digits_or_punctuation() {
    let pipeline = TextPipeline::production();

    for sample in SAMPLES {
        let normalized = pipeline.normalize(sample);
        assert!(!normalized.chars().any(|c| c.is_ascii_digit()));
        assert!(!normalized.chars().any(|c| c.is_ascii_punctuation()));
        assert!(!normalized.contains("  "));
        assert_eq!(normalized.trim(), normalized);
    }
}

#[test]
fn test_digits_split_words() {
    let pipeline = TextPipeline::production();
    assert_eq!(pipeline.normalize("abc123def"), "abc def");
    assert_eq!(pipeline.normalize("2024"), "");
}

#[test]
fn test_apostrophe_splits_words() {
    let pipeline = TextPipeline::production();
    assert_eq!(pipeline.normalize("Can't"), "can t");
}

#[test]
fn test_unicode_letters_survive() {
    let pipeline = TextPipeline::production();
    assert_eq!(pipeline.normalize("Café NAÏVE"), "café naïve");
}

#[test]
fn test_non_ascii_digits_removed() {
    let pipeline = TextPipeline::production();
    assert_eq!(pipeline.normalize("x١٢٣y"), "x y");
}

#[test]
fn test_tokenize_matches_split_of_normalize() {
    let pipeline = TextPipeline::production();
    let text = "The QUICK, brown fox (2nd)";

    let tokens = pipeline.tokenize(text);
    assert_eq!(tokens, vec!["the", "quick", "brown", "fox", "nd"]);
    assert_eq!(tokens.join(" "), pipeline.normalize(text));
}

#[test]
fn test_custom_pipeline_order() {
    let pipeline = TextPipeline::new([
        Transformer::RemovePunctuation,
        Transformer::CollapseWhitespace,
        Transformer::ConvertCase(CaseMode::Upper),
    ]);

    assert_eq!(pipeline.normalize("hello,  world"), "HELLO WORLD");
    assert_eq!(pipeline.len(), 3);
}

#[test]
fn test_title_case_transformer() {
    let title = Transformer::ConvertCase(CaseMode::Title);
    assert_eq!(title.transform("the OLD man"), "The Old Man");
}
