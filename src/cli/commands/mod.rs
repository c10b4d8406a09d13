//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command. Commands write to the supplied writer so they
//! can be driven from tests.

pub mod completions;
pub mod config;
pub mod index;
pub mod repl;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::IndexArgs;
pub use repl::ReplArgs;
pub use search::SearchArgs;
