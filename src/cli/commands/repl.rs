//! Interactive loop - prompt for queries until the user quits

use crate::cli::output::write_hit;
use crate::cli::OutputFormat;
use crate::core::session::SearchSession;
use clap::Args;
use std::io::{BufRead, Write};

/// Prompt shown before each query
pub const PROMPT: &str = "Search to find a doc (q to quit): ";

/// Arguments for the interactive loop
#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Do not print the prompt (useful when piping queries in)
    #[arg(long)]
    pub no_prompt: bool,
}

/// Read queries from `input` line by line and write matches to `out`.
///
/// Stops on a line equal to `q` (any case) or at end of input.
pub fn execute(
    args: ReplArgs,
    session: &SearchSession,
    format: OutputFormat,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();

    loop {
        if !args.no_prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.eq_ignore_ascii_case("q") {
            break;
        }

        match format {
            OutputFormat::Human => {
                for name in session.search(query) {
                    write_hit(out, &name)?;
                }
            }
            OutputFormat::Json => {
                let response = session.search_response(query);
                writeln!(out, "{}", serde_json::to_string(&response)?)?;
            }
        }
    }

    Ok(())
}
