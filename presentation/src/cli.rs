//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// The result's wire shape, pretty-printed
    Json,
}

/// CLI arguments for aidpal
#[derive(Parser, Debug)]
#[command(name = "aidpal")]
#[command(author, version, about = "AidPal - first-aid guidance for minor wounds")]
#[command(long_about = r#"
AidPal sends a photo of a minor wound to a hosted multimodal model and
renders a structured first-aid recommendation. A fixed priority list of
models is tried in order until one returns a valid result.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./aidpal.toml       Project-level config
3. ~/.config/aidpal/config.toml   Global config

Example:
  aidpal knee.jpg
  aidpal knee.jpg -c "scraped my knee on gravel"
  aidpal -m gemini-2.5-flash -m gemini-2.0-flash burn.png
  aidpal --history
"#)]
pub struct Cli {
    /// Path to the wound photo (not required with --history)
    pub image: Option<PathBuf>,

    /// Free-text notes about how it happened
    #[arg(short, long, default_value = "")]
    pub context: String,

    /// Candidate models in priority order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Output format (defaults to the config file's setting)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show stored analysis history and exit
    #[arg(long)]
    pub history: bool,

    /// Do not record this analysis in the history store
    #[arg(long)]
    pub no_history: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and defaults, then exit
    #[arg(long)]
    pub show_config: bool,
}
