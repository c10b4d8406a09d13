//! Configuration management for txtsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The stop-word location is plain configuration so tests can point it
//! at a fixture or replace it with an explicit list.

use crate::core::error::{Result, SearchError};
use crate::core::stop_words::StopWordSource;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub stop_words: StopWordsConfig,
}

/// Document crawling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    /// Directory holding the documents
    #[serde(default = "default_documents_dir")]
    pub dir: PathBuf,

    /// File patterns to include (glob syntax, matched against file names)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,
}

/// Stop-word configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopWordsConfig {
    /// Newline-separated stop-word file, used when `words` is not set
    #[serde(default = "default_stop_words_file")]
    pub file: PathBuf,

    /// Explicit stop-word list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

// Default value functions
fn default_documents_dir() -> PathBuf {
    PathBuf::from("data/documents")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.txt".to_string()]
}

fn default_stop_words_file() -> PathBuf {
    PathBuf::from("data/stop_words.txt")
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            dir: default_documents_dir(),
            include_patterns: default_include_patterns(),
            recursive: false,
        }
    }
}

impl Default for StopWordsConfig {
    fn default() -> Self {
        Self {
            file: default_stop_words_file(),
            words: None,
        }
    }
}

impl StopWordsConfig {
    /// The explicit list if one is set, otherwise the file
    pub fn source(&self) -> StopWordSource {
        match &self.words {
            Some(words) => StopWordSource::List(words.clone()),
            None => StopWordSource::File(self.file.clone()),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. TXTSEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/txtsearch/config.toml)
    /// 3. ./txtsearch.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("TXTSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("txtsearch.toml").exists() {
                Self::from_file("txtsearch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("TXTSEARCH_DOCUMENTS_DIR") {
            self.documents.dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("TXTSEARCH_STOP_WORDS_FILE") {
            self.stop_words.file = PathBuf::from(file);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.documents.include_patterns.is_empty() {
            return Err(SearchError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Documents dir: {:?}", self.documents.dir);
        tracing::info!(
            "  Include patterns: {:?}",
            self.documents.include_patterns
        );
        tracing::info!("  Recursive: {}", self.documents.recursive);
        match &self.stop_words.words {
            Some(words) => tracing::info!("  Stop words: {} explicit entries", words.len()),
            None => tracing::info!("  Stop words file: {:?}", self.stop_words.file),
        }
    }
}
