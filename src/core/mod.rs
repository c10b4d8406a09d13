//! Core domain logic (interface-agnostic)
//!
//! # Architecture
//!
//! - **text**: Normalization transforms and the pipeline that chains them
//! - **stop_words**: Stop-word loading and normalization
//! - **index**: Inverted index build
//! - **search**: Query resolution
//! - **indexer**: Directory walking and document crawling
//! - **session**: Owns documents, pipeline, stop words and index
//! - **config**, **xdg**: Configuration loading (TOML + environment)
//! - **error**, **types**: Error enum and shared data structures

pub mod config;
pub mod error;
pub mod index;
pub mod indexer;
pub mod search;
pub mod session;
pub mod stop_words;
pub mod text;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SearchError};
pub use session::SearchSession;
