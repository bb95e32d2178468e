//! Presentation layer for deckwright
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive terminal dialog.

pub mod cli;
pub mod dialog;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use dialog::InteractiveClarification;
pub use output::{ConsoleFormatter, FormatResult, JsonFormatter, OutputFormatter, formatter_for};
