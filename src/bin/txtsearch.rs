//! txtsearch - keyword search over a directory of text documents
//!
//! Loads every matching document, builds an inverted index and answers
//! queries either interactively or one-shot.
//!
//! # Examples
//!
//! ```bash
//! # Interactive loop over the default documents directory
//! txtsearch
//!
//! # One-shot search against another directory
//! txtsearch -d ~/notes search "quick fox"
//!
//! # Index statistics as JSON
//! txtsearch --format json index
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txtsearch::cli::output::print_error;
use txtsearch::cli::{run, Cli};

fn main() {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txtsearch=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
