//! Text normalization.
//!
//! A [`TextPipeline`] is an ordered chain of [`Transformer`]s folded
//! left-to-right over a string. The production pipeline lowercases,
//! strips digits and punctuation, then collapses whitespace.

pub mod pipeline;
pub mod transform;

pub use pipeline::TextPipeline;
pub use transform::{CaseMode, Transform, Transformer};
