//! Stop-word loading and normalization.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, SearchError};
use crate::core::text::TextPipeline;

/// Where raw stop words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopWordSource {
    /// An explicit in-memory list
    List(Vec<String>),
    /// A newline-separated file
    File(PathBuf),
}

impl StopWordSource {
    /// Read the raw, unnormalized entries
    ///
    /// File entries are split on `\n` only. A trailing newline yields an
    /// empty entry, which normalizes to the empty string and is harmless.
    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            StopWordSource::List(words) => Ok(words.clone()),
            StopWordSource::File(path) => read_stop_word_file(path),
        }
    }
}

fn read_stop_word_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SearchError::StopWordsUnavailable(format!("Failed to read {}: {e}", path.display()))
    })?;

    Ok(contents.split('\n').map(str::to_string).collect())
}

/// Set of normalized tokens excluded from indexing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Normalize each raw entry with `pipeline` and collect into a set
    pub fn from_words<I, S>(words: I, pipeline: &TextPipeline) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| pipeline.normalize(w.as_ref()))
                .collect(),
        }
    }

    /// Load raw entries from `source` and normalize them
    pub fn load(source: &StopWordSource, pipeline: &TextPipeline) -> Result<Self> {
        let raw = source.load()?;
        let set = Self::from_words(&raw, pipeline);
        tracing::debug!(
            "Loaded {} stop words ({} raw entries)",
            set.len(),
            raw.len()
        );
        Ok(set)
    }

    /// Membership test for an already-normalized token
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
