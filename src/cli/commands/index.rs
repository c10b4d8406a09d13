//! Index command - build the index and report statistics

use crate::cli::output::{colors, format_duration_colored};
use crate::cli::OutputFormat;
use crate::core::session::SearchSession;
use crate::core::types::IndexStats;
use clap::Args;
use serde::Serialize;
use std::io::Write;

/// Arguments for the index command
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// Also list every indexed term with its document count
    #[arg(long)]
    pub terms: bool,
}

/// A term and the number of documents containing it
#[derive(Debug, Serialize)]
pub struct TermEntry {
    pub term: String,
    pub documents: usize,
}

/// Index command response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    #[serde(flatten)]
    pub stats: IndexStats,
    pub document_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_list: Option<Vec<TermEntry>>,
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    session: &SearchSession,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = session.index();

    let response = IndexResponse {
        stats: session.stats().clone(),
        document_names: session.documents().keys().cloned().collect(),
        term_list: args.terms.then(|| {
            index
                .terms()
                .into_iter()
                .map(|term| TermEntry {
                    term: term.to_string(),
                    documents: index.doc_frequency(term),
                })
                .collect()
        }),
    };

    match format {
        OutputFormat::Human => {
            let stats = &response.stats;
            writeln!(out, "{}", colors::label("Index built"))?;
            writeln!(
                out,
                "  Documents:   {}",
                colors::number(&stats.documents.to_string())
            )?;
            writeln!(
                out,
                "  Empty:       {}",
                colors::number(&stats.empty_documents.to_string())
            )?;
            writeln!(
                out,
                "  Terms:       {}",
                colors::number(&stats.terms.to_string())
            )?;
            writeln!(
                out,
                "  Postings:    {}",
                colors::number(&stats.postings.to_string())
            )?;
            writeln!(
                out,
                "  Stop words:  {}",
                colors::number(&stats.stop_words.to_string())
            )?;
            writeln!(
                out,
                "  Duration:    {}",
                format_duration_colored(stats.duration_ms as f64 / 1000.0)
            )?;

            if let Some(terms) = &response.term_list {
                writeln!(out)?;
                for entry in terms {
                    writeln!(
                        out,
                        "{} {}",
                        entry.term,
                        colors::dim(&format!("({})", entry.documents))
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        }
    }

    Ok(())
}
