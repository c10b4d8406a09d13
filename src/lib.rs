//! txtsearch - in-memory full-text search over plain-text documents
//!
//! Crawls a directory of `.txt` files, normalizes every word through a
//! fixed text pipeline and builds an inverted index from token to
//! document names. Queries are normalized the same way and resolved
//! token by token, without ranking.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - text (normalization pipeline), stop_words, index, search
//!   - indexer (directory walking, document crawling)
//!   - session (owns the built index)
//!   - config, error, types, xdg
//!
//! - **cli**: clap adapter (depends on core)
//!   - one-shot search, interactive loop, stats, config, completions

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SearchError};
pub use core::index::InvertedIndex;
pub use core::session::SearchSession;
pub use core::stop_words::{StopWordSet, StopWordSource};
pub use core::text::{CaseMode, TextPipeline, Transform, Transformer};
pub use core::types::*;
