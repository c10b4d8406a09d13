//! Tests for the interactive loop
//!
//! - Quit on `q` / `Q`
//! - Stop at end of input
//! - Prompt handling
//! - JSON lines output

use crate::common::{document_map, output_text, DOC_ONE_TWO};
use std::io::Cursor;
use txtsearch::cli::commands::repl::{execute, ReplArgs, PROMPT};
use txtsearch::cli::OutputFormat;
use txtsearch::{SearchResponse, SearchSession, StopWordSource};

fn session() -> SearchSession {
    SearchSession::from_documents(document_map(DOC_ONE_TWO), &StopWordSource::List(vec![]))
        .unwrap()
}

fn run(input: &str, args: ReplArgs, format: OutputFormat) -> String {
    let mut buf = Vec::new();
    execute(args, &session(), format, Cursor::new(input), &mut buf)
        .expect("Loop should succeed");
    output_text(buf)
}

#[test]
fn test_repl_prints_hits_and_quits() {
    let text = run("quick fox\nq\nbrown\n", ReplArgs::default(), OutputFormat::Human);

    assert_eq!(text.matches(PROMPT).count(), 2);
    assert_eq!(text.matches("- Doc One").count(), 2);
    assert_eq!(text.matches("- Doc Two").count(), 2);
}

#[test]
fn test_repl_uppercase_quit() {
    let text = run("Q\nfox\n", ReplArgs::default(), OutputFormat::Human);

    assert_eq!(text, PROMPT);
}

#[test]
fn test_repl_stops_at_end_of_input() {
    let args = ReplArgs { no_prompt: true };
    let text = run("brown", args, OutputFormat::Human);

    assert!(!text.contains(PROMPT));
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("- Doc Two"));
}

#[test]
fn test_repl_blank_line_prints_nothing() {
    let args = ReplArgs { no_prompt: true };
    let text = run("\n\r\n   \nq\n", args, OutputFormat::Human);

    assert!(text.is_empty());
}

#[test]
fn test_repl_quit_needs_exact_line() {
    let args = ReplArgs { no_prompt: true };
    let text = run("quit\nfox\nq\nbrown\n", args, OutputFormat::Human);

    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("- Doc One"));
}

#[test]
fn test_repl_json_one_line_per_query() {
    let args = ReplArgs { no_prompt: true };
    let text = run("fox\nzebra\n", args, OutputFormat::Json);

    let responses: Vec<SearchResponse> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].results, vec!["Doc One", "Doc Two"]);
    assert_eq!(responses[1].count, 0);
}
