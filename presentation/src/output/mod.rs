//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::{FormatResult, OutputFormatter, formatter_for};
pub use json::JsonFormatter;
