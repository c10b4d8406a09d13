//! Document discovery.
//!
//! Walks the documents directory and reads matching files into a
//! name-keyed document map:
//!
//! - Glob-based file selection (default `*.txt`)
//! - Optional recursion, hidden directories skipped
//! - Display names derived from file stems
//! - Any unreadable file aborts the crawl

pub mod crawler;
pub mod walker;

pub use crawler::{document_name, read_document, DocumentCrawler};
pub use walker::FileWalker;
