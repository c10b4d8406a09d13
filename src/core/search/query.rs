//! Query resolution against an [`InvertedIndex`].
//!
//! Queries go through the same pipeline as the indexed documents, are split
//! on whitespace, and every token's hits are appended in query order. The
//! result is neither ranked nor deduplicated: a document matching two query
//! tokens is listed twice.

use crate::core::index::InvertedIndex;
use crate::core::text::TextPipeline;
use crate::core::types::SearchResponse;

/// Resolves queries against a built index
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver<'a> {
    index: &'a InvertedIndex,
    pipeline: &'a TextPipeline,
}

impl<'a> QueryResolver<'a> {
    /// `pipeline` must be the one the index was built with
    pub fn new(index: &'a InvertedIndex, pipeline: &'a TextPipeline) -> Self {
        Self { index, pipeline }
    }

    /// Matching document names, token-major, duplicates preserved
    pub fn resolve(&self, query: &str) -> Vec<String> {
        self.resolve_tokens(&self.pipeline.tokenize(query))
    }

    /// Resolve a query and keep its normalized tokens alongside the hits
    pub fn search(&self, query: &str) -> SearchResponse {
        let tokens = self.pipeline.tokenize(query);
        let results = self.resolve_tokens(&tokens);

        tracing::debug!(
            "Query {:?} -> {} token(s), {} hit(s)",
            query,
            tokens.len(),
            results.len()
        );

        SearchResponse {
            query: query.to_string(),
            count: results.len(),
            tokens,
            results,
        }
    }

    fn resolve_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .flat_map(|token| self.index.documents_for(token))
            .map(str::to_string)
            .collect()
    }
}

/// Resolve `query` against `index` using `pipeline`
pub fn search(index: &InvertedIndex, pipeline: &TextPipeline, query: &str) -> Vec<String> {
    QueryResolver::new(index, pipeline).resolve(query)
}
