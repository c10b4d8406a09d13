//! CLI adapter for txtsearch
//!
//! Provides the command-line interface over `core/`. Every command that
//! needs the index builds a fresh [`SearchSession`]; nothing is persisted
//! between runs.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::session::SearchSession;

/// txtsearch - search a directory of plain-text documents
///
/// Builds an in-memory inverted index over every `.txt` file in the
/// documents directory and lists the documents containing each query word.
#[derive(Parser, Debug)]
#[command(name = "txtsearch")]
#[command(version)]
#[command(about = "In-memory search over plain-text documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Documents directory (overrides configuration)
    #[arg(long, short = 'd', global = true)]
    pub documents: Option<PathBuf>,

    /// Stop-word file, one word per line (overrides configuration)
    #[arg(long, global = true)]
    pub stop_words: Option<PathBuf>,

    /// Command to run (defaults to the interactive loop)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for queries until `q` is entered
    Repl(commands::ReplArgs),

    /// Run a single query and print the matching documents
    Search(commands::SearchArgs),

    /// Build the index and print its statistics
    Index(commands::IndexArgs),

    /// Show the resolved configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  txtsearch completions bash > ~/.local/share/bash-completion/completions/txtsearch
    ///   zsh:   txtsearch completions zsh > ~/.zfunc/_txtsearch
    ///   fish:  txtsearch completions fish > ~/.config/fish/completions/txtsearch.fish
    Completions(commands::CompletionsArgs),
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.documents {
            config.documents.dir = dir.clone();
        }
        if let Some(file) = &self.stop_words {
            config.stop_words.file = file.clone();
            config.stop_words.words = None;
        }
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions command early (doesn't need configuration)
    if let Some(Commands::Completions(args)) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.log_config();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Repl(commands::ReplArgs::default()));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::ShowConfig(args) => {
            commands::config::execute(args, &config, cli.format, &mut out)
        }
        Commands::Repl(args) => {
            let session = SearchSession::open(&config)?;
            let stdin = io::stdin();
            commands::repl::execute(args, &session, cli.format, stdin.lock(), &mut out)
        }
        Commands::Search(args) => {
            let session = SearchSession::open(&config)?;
            commands::search::execute(args, &session, cli.format, &mut out)
        }
        Commands::Index(args) => {
            let session = SearchSession::open(&config)?;
            commands::index::execute(args, &session, cli.format, &mut out)
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
