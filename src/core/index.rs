//! Inverted index mapping normalized tokens to document names.

use std::collections::{BTreeSet, HashMap};

use crate::core::stop_words::StopWordSet;
use crate::core::text::TextPipeline;
use crate::core::types::DocumentMap;

/// An inverted index mapping tokens to the set of documents containing them.
///
/// Built once from a complete document set and never updated afterwards.
/// Name sets are ordered so lookups yield names deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    /// token → names of documents containing it (never empty)
    postings: HashMap<String, BTreeSet<String>>,
    /// Number of documents the index was built from
    doc_count: usize,
}

impl InvertedIndex {
    /// Build the index from raw documents.
    ///
    /// Each whitespace-separated word is normalized with `pipeline`. Words
    /// that normalize to nothing or to a stop word are dropped. A word that
    /// normalizes to several fragments (`abc123def` -> `abc def`) indexes
    /// each fragment that is not itself a stop word.
    pub fn build(
        documents: &DocumentMap,
        stop_words: &StopWordSet,
        pipeline: &TextPipeline,
    ) -> Self {
        let mut postings: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (name, content) in documents {
            let mut added = 0usize;

            for word in content.split_whitespace() {
                let normalized = pipeline.normalize(word);
                if normalized.is_empty() || stop_words.contains(&normalized) {
                    continue;
                }

                for token in normalized.split(' ') {
                    if stop_words.contains(token) {
                        continue;
                    }
                    if postings
                        .entry(token.to_string())
                        .or_default()
                        .insert(name.clone())
                    {
                        added += 1;
                    }
                }
            }

            tracing::debug!("Indexed {:?} ({} distinct tokens)", name, added);
        }

        Self {
            postings,
            doc_count: documents.len(),
        }
    }

    /// Names of documents containing `token`, or `None` if it is not indexed
    pub fn get(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(token)
    }

    /// Iterate over names of documents containing `token`
    pub fn documents_for<'a>(&'a self, token: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.postings
            .get(token)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    pub fn contains_term(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of documents containing `token`
    pub fn doc_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map(BTreeSet::len).unwrap_or(0)
    }

    /// Total number of documents the index was built from
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of unique terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Total (term, document) pairs
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(BTreeSet::len).sum()
    }

    /// Indexed terms in sorted order
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Number of documents that contributed no term at all
    pub fn documents_without_terms(&self, documents: &DocumentMap) -> usize {
        documents
            .keys()
            .filter(|name| !self.postings.values().any(|names| names.contains(*name)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
