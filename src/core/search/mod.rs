//! Search module for token lookups.
//!
//! This module resolves whitespace-tokenized queries against the
//! inverted index. There is no ranking: hits are concatenated per token.

mod query;

pub use query::{search, QueryResolver};
