//! Tests for query resolution
//!
//! - Token-major ordering with duplicates
//! - Query normalization mirrors document normalization
//! - Empty and unmatched queries

use crate::common::{document_map, DOC_ONE_TWO};
use txtsearch::core::search::{search, QueryResolver};
use txtsearch::{InvertedIndex, StopWordSet, TextPipeline};

fn doc_one_two_index(pipeline: &TextPipeline) -> InvertedIndex {
    InvertedIndex::build(
        &document_map(DOC_ONE_TWO),
        &StopWordSet::default(),
        pipeline,
    )
}

#[test]
fn test_two_token_query_lists_each_hit_per_token() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert_eq!(
        search(&index, &pipeline, "quick fox"),
        vec!["Doc One", "Doc Two", "Doc One", "Doc Two"]
    );
}

#[test]
fn test_query_is_case_and_punctuation_insensitive() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert_eq!(
        search(&index, &pipeline, "  BROWN!!  "),
        vec!["Doc Two"]
    );
}

#[test]
fn test_token_order_drives_result_order() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert_eq!(
        search(&index, &pipeline, "brown the"),
        vec!["Doc Two", "Doc One"]
    );
}

#[test]
fn test_unmatched_tokens_contribute_nothing() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert_eq!(search(&index, &pipeline, "zebra fox"), vec!["Doc One", "Doc Two"]);
    assert!(search(&index, &pipeline, "zebra").is_empty());
}

#[test]
fn test_empty_and_symbol_only_queries() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert!(search(&index, &pipeline, "").is_empty());
    assert!(search(&index, &pipeline, "   ").is_empty());
    assert!(search(&index, &pipeline, "123 !!!").is_empty());
}

#[test]
fn test_response_reports_tokens_and_count() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    let response = QueryResolver::new(&index, &pipeline).search("Quick, FOX");

    assert_eq!(response.query, "Quick, FOX");
    assert_eq!(response.tokens, vec!["quick", "fox"]);
    assert_eq!(response.count, 4);
    assert_eq!(response.results.len(), response.count);
}

#[test]
fn test_repeated_token_repeats_hits() {
    let pipeline = TextPipeline::production();
    let index = doc_one_two_index(&pipeline);

    assert_eq!(
        search(&index, &pipeline, "brown brown"),
        vec!["Doc Two", "Doc Two"]
    );
}
