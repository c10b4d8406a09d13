// Test helper functions

use txtsearch::core::config::Config;
use txtsearch::core::session::SearchSession;
use txtsearch::{DocumentMap, InvertedIndex, StopWordSet, TextPipeline};

use super::fixtures::TestDocs;

/// Collect `(name, content)` pairs into a document map
#[allow(dead_code)] // Used in integration tests
pub fn document_map(entries: &[(&str, &str)]) -> DocumentMap {
    entries
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect()
}

/// Open a session over a fixture directory
#[allow(dead_code)] // Used in integration tests
pub fn build_session(docs: &TestDocs) -> SearchSession {
    let mut config = Config::default();
    config.documents.dir = docs.documents_dir();
    config.stop_words.file = docs.stop_words_path();

    SearchSession::open(&config).expect("Failed to open session")
}

/// Assert the structural invariants every built index must satisfy
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_index(
    index: &InvertedIndex,
    documents: &DocumentMap,
    stop_words: &StopWordSet,
    pipeline: &TextPipeline,
) {
    for term in index.terms() {
        assert!(!term.is_empty(), "Index contains an empty key");
        assert!(
            !stop_words.contains(term),
            "Stop word {term:?} is an index key"
        );
        assert_eq!(
            pipeline.normalize(term),
            term,
            "Key {term:?} is not in normalized form"
        );

        let names = index.get(term).expect("Listed term must resolve");
        assert!(!names.is_empty(), "Key {term:?} has no documents");
        for name in names {
            assert!(
                documents.contains_key(name),
                "Key {term:?} points at unknown document {name:?}"
            );
        }
    }
}

/// Decode a command's output buffer
#[allow(dead_code)] // Used in integration tests
pub fn output_text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("Command output is not UTF-8")
}
