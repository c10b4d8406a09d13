//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::text::TextPipeline;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::io::Write;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub documents: DocumentsInfo,
    pub stop_words: StopWordsInfo,
    pub pipeline: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentsInfo {
    pub dir: String,
    pub include_patterns: Vec<String>,
    pub recursive: bool,
}

#[derive(Debug, Serialize)]
pub struct StopWordsInfo {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_words: Option<usize>,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        documents: DocumentsInfo {
            dir: config.documents.dir.to_string_lossy().into_owned(),
            include_patterns: config.documents.include_patterns.clone(),
            recursive: config.documents.recursive,
        },
        stop_words: StopWordsInfo {
            file: config.stop_words.file.to_string_lossy().into_owned(),
            explicit_words: config.stop_words.words.as_ref().map(Vec::len),
        },
        pipeline: TextPipeline::production().to_string(),
    };

    match format {
        OutputFormat::Human => {
            writeln!(out, "{}", colors::label("Configuration:"))?;
            writeln!(
                out,
                "  config_file: {}",
                colors::file_path(&response.config_file)
            )?;
            writeln!(out, "  documents:")?;
            writeln!(
                out,
                "    dir: {}",
                colors::file_path(&response.documents.dir)
            )?;
            writeln!(
                out,
                "    include_patterns: {:?}",
                response.documents.include_patterns
            )?;
            writeln!(out, "    recursive: {}", response.documents.recursive)?;
            writeln!(out, "  stop_words:")?;
            match response.stop_words.explicit_words {
                Some(count) => writeln!(out, "    words: {count} explicit entries")?,
                None => writeln!(
                    out,
                    "    file: {}",
                    colors::file_path(&response.stop_words.file)
                )?,
            }
            writeln!(out, "  {}", response.pipeline)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        }
    }

    Ok(())
}
