//! Error types and error handling for txtsearch.
//!
//! Normalization, indexing and querying are total functions and never
//! fail. Errors only come from the boundary: crawling the documents
//! directory, loading stop words and reading configuration.

use thiserror::Error;

/// Result type alias for txtsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for txtsearch
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Cannot read document {0}")]
    UnreadableDocument(String),

    #[error("Stop words unavailable: {0}")]
    StopWordsUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidPath(_) | SearchError::StopWordsUnavailable(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, SearchError::ConfigError(_) | SearchError::TomlError(_))
    }
}
