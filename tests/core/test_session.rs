//! Tests for session construction
//!
//! - Opening from configuration on disk
//! - Stop-word sources (file, explicit list, missing file)
//! - Statistics

use crate::common::{build_session, document_map, TestDocs, DOC_ONE_TWO};
use std::path::PathBuf;
use txtsearch::core::config::Config;
use txtsearch::{SearchSession, StopWordSource};

#[test]
fn test_open_and_search_fixture() {
    let docs = TestDocs::small();
    let session = build_session(&docs);

    assert_eq!(session.documents().len(), 3);
    assert_eq!(session.search("fox"), vec!["Lazy Dog", "Quick Fox"]);
    assert_eq!(session.search("overnight"), vec!["River Notes"]);
}

#[test]
fn test_stop_words_from_file_never_match() {
    let docs = TestDocs::small();
    let session = build_session(&docs);

    assert!(session.search("the").is_empty());
    assert!(session.search("A").is_empty());
    assert!(!session.index().contains_term("the"));
}

#[test]
fn test_stats_reflect_build() {
    let docs = TestDocs::with_files(&[
        ("documents/real.txt", "quick fox"),
        ("documents/filler.txt", "the the THE"),
    ])
    .with_stop_words(&["the"]);

    let session = build_session(&docs);
    let stats = session.stats();

    assert_eq!(stats.documents, 2);
    assert_eq!(stats.empty_documents, 1);
    assert_eq!(stats.terms, 2);
    assert_eq!(stats.postings, 2);
    assert_eq!(stats.stop_words, 1);
}

#[test]
fn test_explicit_stop_words_override_file() {
    let docs = TestDocs::small();

    let mut config = Config::default();
    config.documents.dir = docs.documents_dir();
    config.stop_words.file = PathBuf::from("/nonexistent/stop_words.txt");
    config.stop_words.words = Some(vec!["fox".to_string()]);

    let session = SearchSession::open(&config).unwrap();

    assert!(session.search("fox").is_empty());
    assert_eq!(session.search("the"), vec!["Lazy Dog", "Quick Fox"]);
}

#[test]
fn test_missing_stop_word_file_fails() {
    let docs = TestDocs::with_files(&[("documents/one.txt", "fox")]);

    let mut config = Config::default();
    config.documents.dir = docs.documents_dir();
    config.stop_words.file = docs.stop_words_path();

    let err = SearchSession::open(&config).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unreadable_document_aborts_open() {
    let docs = TestDocs::with_files(&[("documents/good.txt", "fox")]).with_stop_words(&["the"]);
    std::fs::write(docs.documents_dir().join("bad.txt"), [0xff, 0xfe, 0x80]).unwrap();

    let mut config = Config::default();
    config.documents.dir = docs.documents_dir();
    config.stop_words.file = docs.stop_words_path();

    let err = SearchSession::open(&config).unwrap_err();
    assert!(err.message().contains("bad.txt"));
}

#[test]
fn test_missing_documents_dir_fails() {
    let docs = TestDocs::with_files(&[]).with_stop_words(&["the"]);

    let mut config = Config::default();
    config.documents.dir = docs.path().join("missing");
    config.stop_words.file = docs.stop_words_path();

    assert!(SearchSession::open(&config).is_err());
}

#[test]
fn test_from_documents_matches_scenario() {
    let session =
        SearchSession::from_documents(document_map(DOC_ONE_TWO), &StopWordSource::List(vec![]))
            .unwrap();

    assert_eq!(
        session.search("quick fox"),
        vec!["Doc One", "Doc Two", "Doc One", "Doc Two"]
    );
    assert!(session.search("").is_empty());
}

#[test]
fn test_empty_document_directory_builds_empty_index() {
    let docs = TestDocs::with_files(&[]).with_stop_words(&[]);
    let session = build_session(&docs);

    assert!(session.documents().is_empty());
    assert!(session.index().is_empty());
    assert!(session.search("anything").is_empty());
}
