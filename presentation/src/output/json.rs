//! JSON output formatter

use super::formatter::{FormatResult, OutputFormatter};
use deckwright_application::{DialogOutcome, Interpretation};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> FormatResult {
        serde_json::to_string_pretty(value)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_interpretation(&self, interpretation: &Interpretation) -> FormatResult {
        Self::to_json(interpretation)
    }

    fn format_outcome(&self, outcome: &DialogOutcome) -> FormatResult {
        Self::to_json(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckwright_application::InterpretRequestUseCase;
    use deckwright_domain::ClarificationPolicy;
    use std::collections::BTreeMap;

    #[test]
    fn test_resolved_json_has_query_signals() {
        let interpretation = InterpretRequestUseCase::new().execute(
            "standard gruul midrange dinosaurs",
            &ClarificationPolicy::default(),
        );
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_interpretation(&interpretation).unwrap())
                .unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["intent"]["format"], "standard");
        assert_eq!(json["intent"]["colors"], serde_json::json!(["R", "G"]));
        assert_eq!(json["query"]["signals"][0]["value"], "Dinosaur");
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        // JSON object keys must be strings
        let value = BTreeMap::from([((1u8, 2u8), "pair")]);
        let err = JsonFormatter::to_json(&value).unwrap_err();
        assert!(err.to_string().contains("key must be a string"));
    }
}
