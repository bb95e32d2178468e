//! Output formatter trait

use deckwright_application::{DialogOutcome, Interpretation};
use deckwright_domain::OutputFormat;

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;

/// Serialization failure while rendering a result
pub type FormatResult = Result<String, serde_json::Error>;

/// Trait for formatting pipeline results
pub trait OutputFormatter {
    /// Format a single interpretation round
    fn format_interpretation(&self, interpretation: &Interpretation) -> FormatResult;

    /// Format the result of a full dialog
    fn format_outcome(&self, outcome: &DialogOutcome) -> FormatResult;
}

/// The formatter for `format`.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
