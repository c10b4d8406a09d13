//! Search command - run one query against the documents

use crate::cli::output::{colors, write_hit};
use crate::cli::OutputFormat;
use crate::core::session::SearchSession;
use clap::Args;
use std::io::Write;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (whitespace-separated words, no operators)
    pub query: String,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    session: &SearchSession,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = session.search_response(&args.query);

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                writeln!(
                    out,
                    "No documents found for '{}'",
                    colors::label(&args.query)
                )?;
            } else {
                for name in &response.results {
                    write_hit(out, name)?;
                }
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        }
    }

    Ok(())
}
