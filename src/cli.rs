//! Command-line argument parsing for the editor
//!
//! Supports:
//! - An explicit config file
//! - Loading an initial document from a JSON run list or plain text

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::EditorConfig;
use crate::model::document::Document;

/// A paginated rich-text editor
#[derive(Parser, Debug)]
#[command(name = "quire", version, about = "A paginated rich-text editor")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/quire/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON array of runs to open (`[{"value": "A", "bold": true}, ...]`)
    #[arg(short = 'd', long, value_name = "PATH", conflicts_with = "text")]
    pub document: Option<PathBuf>,

    /// Plain text to start with
    #[arg(short = 't', long, value_name = "STRING")]
    pub text: Option<String>,
}

/// Everything the runtime needs to start a session
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config: EditorConfig,
    pub document: Document,
}

impl CliArgs {
    /// Resolve CLI arguments into startup state
    pub fn into_config(self) -> anyhow::Result<StartupConfig> {
        let config = match &self.config {
            Some(path) => EditorConfig::load_from(path)?,
            None => EditorConfig::load(),
        };

        let document = if let Some(path) = &self.document {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read document {}", path.display()))?;
            Document::from_json(&json)
                .with_context(|| format!("Failed to parse document {}", path.display()))?
        } else if let Some(text) = &self.text {
            Document::with_text(text)
        } else {
            Document::new()
        };

        Ok(StartupConfig { config, document })
    }
}
