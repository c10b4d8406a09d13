//! Ordered, immutable chain of text transformations.

use std::fmt;

use crate::core::text::transform::{CaseMode, Transform, Transformer};

/// An ordered sequence of [`Transformer`]s applied left-to-right.
///
/// The order is fixed at construction. The same pipeline must be used for
/// documents, stop words and queries, otherwise tokens stop matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPipeline {
    transformers: Box<[Transformer]>,
}

impl TextPipeline {
    /// Create a pipeline from an ordered list of transformers
    pub fn new(transformers: impl IntoIterator<Item = Transformer>) -> Self {
        Self {
            transformers: transformers.into_iter().collect(),
        }
    }

    /// The normalization used for indexing, stop words and queries:
    /// lowercase, strip digits, strip punctuation, collapse whitespace.
    ///
    /// Digit and punctuation removal run before the collapse so the spaces
    /// they introduce are collapsed too.
    pub fn production() -> Self {
        Self::new([
            Transformer::ConvertCase(CaseMode::Lower),
            Transformer::RemoveDigits,
            Transformer::RemovePunctuation,
            Transformer::CollapseWhitespace,
        ])
    }

    /// Fold every transformer over `text` in order
    pub fn normalize(&self, text: &str) -> String {
        self.transformers
            .iter()
            .fold(text.to_string(), |acc, t| t.transform(&acc))
    }

    /// Normalize `text` and split it into whitespace-separated tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::production()
    }
}

impl Transform for TextPipeline {
    fn transform(&self, text: &str) -> String {
        self.normalize(text)
    }
}

impl fmt::Display for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.transformers.iter().map(|t| t.to_string()).collect();
        write!(f, "Pipeline: [{}]", names.join(" -> "))
    }
}
