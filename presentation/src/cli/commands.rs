//! CLI command definitions

use clap::{Parser, ValueEnum};
use deckwright_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for interpreted requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable summary
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for deckwright
#[derive(Parser, Debug)]
#[command(name = "deckwright")]
#[command(author, version, about = "Understand a deck request and turn it into a card query")]
#[command(long_about = r#"
Deckwright reads a free-form deck request, works out what is being asked for,
asks at most a few follow-up questions, and prints the resulting deck query.

Without --interactive, questions are not asked: they are answered from
--answer values in order, and anything left open falls back to defaults.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./deckwright.toml        Project-level config
3. ~/.config/deckwright/config.toml   Global config

Example:
  deckwright "standard gruul midrange dinosaurs"
  deckwright "goblins" --answer modern --answer red
  deckwright --interactive "build me a deck"
  deckwright --output json "izzet spells"
"#)]
pub struct Cli {
    /// The deck request (read interactively if omitted with --interactive)
    pub request: Option<String>,

    /// Ask clarification questions on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// Pre-recorded answer to the next clarification (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub answer: Vec<String>,

    /// Maximum clarification questions (overrides config)
    #[arg(long, value_name = "N")]
    pub max_questions: Option<usize>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
