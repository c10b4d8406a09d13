//! Stateless text transformations.
//!
//! Every transformation maps text to text, is deterministic and is
//! idempotent for a fixed configuration. Digits and punctuation are
//! replaced by a space rather than deleted so that `abc123def` keeps
//! its token boundary and becomes `abc def` after whitespace collapse.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::SearchError;

// Unicode decimal digits (general category Nd)
static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

// ASCII punctuation: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());

/// A single text-to-text transformation.
pub trait Transform {
    /// Apply the transformation to `text`
    fn transform(&self, text: &str) -> String;
}

/// Target case for [`Transformer::ConvertCase`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Fold to lowercase
    #[default]
    Lower,
    /// Fold to uppercase
    Upper,
    /// Capitalize the first letter of each whitespace-separated word
    Title,
}

impl CaseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Lower => "lower",
            CaseMode::Upper => "upper",
            CaseMode::Title => "title",
        }
    }

    fn apply(&self, text: &str) -> String {
        match self {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Title => title_case(text),
        }
    }
}

impl FromStr for CaseMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(CaseMode::Lower),
            "upper" => Ok(CaseMode::Upper),
            "title" => Ok(CaseMode::Title),
            other => Err(SearchError::ConfigError(format!(
                "Unknown case mode '{other}' (expected lower, upper or title)"
            ))),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of transformations a pipeline is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformer {
    /// Case folding in the configured mode
    ConvertCase(CaseMode),
    /// Replace each decimal digit with a space
    RemoveDigits,
    /// Replace each ASCII punctuation character with a space
    RemovePunctuation,
    /// Trim and collapse whitespace runs into single spaces
    CollapseWhitespace,
}

impl Transform for Transformer {
    fn transform(&self, text: &str) -> String {
        match self {
            Transformer::ConvertCase(mode) => mode.apply(text),
            Transformer::RemoveDigits => DIGIT_PATTERN.replace_all(text, " ").into_owned(),
            Transformer::RemovePunctuation => {
                PUNCTUATION_PATTERN.replace_all(text, " ").into_owned()
            }
            Transformer::CollapseWhitespace => text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

impl fmt::Display for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformer::ConvertCase(mode) => write!(f, "ConvertCase({mode})"),
            Transformer::RemoveDigits => f.write_str("RemoveDigits"),
            Transformer::RemovePunctuation => f.write_str("RemovePunctuation"),
            Transformer::CollapseWhitespace => f.write_str("CollapseWhitespace"),
        }
    }
}

/// Push the title form of `c`: the first char of its uppercase mapping,
/// with any remainder of a multi-char mapping lowercased (`ß` -> `Ss`).
pub(crate) fn push_titlecase(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Uppercase the first character of every whitespace-separated word and
/// lowercase the rest. Whitespace is preserved as-is.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            push_titlecase(&mut out, c);
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
