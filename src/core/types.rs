//! Core data types for txtsearch.
//!
//! This module defines the data structures shared between the core
//! and the CLI: documents, index statistics and search responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Crawled documents keyed by their derived name
pub type DocumentMap = BTreeMap<String, String>;

/// A single crawled document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name derived from the file stem ("my_notes.txt" -> "My Notes")
    pub name: String,

    /// Raw file content
    pub content: String,
}

/// Statistics from building a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents loaded into the session
    pub documents: usize,

    /// Documents whose content normalized entirely to stop words or nothing
    pub empty_documents: usize,

    /// Number of distinct indexed tokens
    pub terms: usize,

    /// Total (token, document) pairs in the index
    pub postings: usize,

    /// Number of normalized stop words
    pub stop_words: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// Result of resolving a query against the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query as entered
    pub query: String,

    /// Normalized query tokens, in query order
    pub tokens: Vec<String>,

    /// Matching document names, token-major, duplicates preserved
    pub results: Vec<String>,

    /// Number of entries in `results`
    pub count: usize,
}
