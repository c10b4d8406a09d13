//! Search session.
//!
//! A [`SearchSession`] owns everything a query needs: the crawled
//! documents, the normalization pipeline, the stop-word set and the
//! inverted index. Construction runs the phases in a fixed order
//! (crawl, pipeline, stop words, index) and either completes or fails
//! as a whole.

use std::time::Instant;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::index::InvertedIndex;
use crate::core::indexer::DocumentCrawler;
use crate::core::search::QueryResolver;
use crate::core::stop_words::{StopWordSet, StopWordSource};
use crate::core::text::TextPipeline;
use crate::core::types::{DocumentMap, IndexStats, SearchResponse};

/// A read-only, fully built search session
#[derive(Debug, Clone)]
pub struct SearchSession {
    documents: DocumentMap,
    pipeline: TextPipeline,
    stop_words: StopWordSet,
    index: InvertedIndex,
    stats: IndexStats,
}

impl SearchSession {
    /// Crawl the configured documents directory and build the index
    pub fn open(config: &Config) -> Result<Self> {
        let start = Instant::now();

        let crawler = DocumentCrawler::new(&config.documents)?;
        let documents = crawler.crawl(&config.documents.dir)?;

        Self::build(documents, &config.stop_words.source(), start)
    }

    /// Build a session from in-memory documents
    pub fn from_documents(documents: DocumentMap, stop_words: &StopWordSource) -> Result<Self> {
        Self::build(documents, stop_words, Instant::now())
    }

    fn build(documents: DocumentMap, stop_words: &StopWordSource, start: Instant) -> Result<Self> {
        let pipeline = TextPipeline::production();
        tracing::debug!("{}", pipeline);

        let stop_words = StopWordSet::load(stop_words, &pipeline)?;
        let index = InvertedIndex::build(&documents, &stop_words, &pipeline);

        let stats = IndexStats {
            documents: documents.len(),
            empty_documents: index.documents_without_terms(&documents),
            terms: index.term_count(),
            postings: index.posting_count(),
            stop_words: stop_words.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Index built: {} documents, {} terms, {} postings in {}ms",
            stats.documents,
            stats.terms,
            stats.postings,
            stats.duration_ms
        );

        Ok(Self {
            documents,
            pipeline,
            stop_words,
            index,
            stats,
        })
    }

    /// Matching document names for `query`, token-major with repetition
    pub fn search(&self, query: &str) -> Vec<String> {
        self.resolver().resolve(query)
    }

    /// Like [`search`](Self::search) but also reports the normalized tokens
    pub fn search_response(&self, query: &str) -> SearchResponse {
        self.resolver().search(query)
    }

    fn resolver(&self) -> QueryResolver<'_> {
        QueryResolver::new(&self.index, &self.pipeline)
    }

    pub fn documents(&self) -> &DocumentMap {
        &self.documents
    }

    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
