//! Clarification configuration from TOML (`[clarification]` section)

use deckwright_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_MAX_CLARIFICATIONS, Severity};
use serde::{Deserialize, Serialize};

/// Raw clarification configuration from TOML
///
/// # Example
///
/// ```toml
/// [clarification]
/// max_questions = 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClarificationConfig {
    /// Maximum follow-up questions per request (must be positive)
    pub max_questions: usize,
}

impl Default for FileClarificationConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_CLARIFICATIONS,
        }
    }
}

impl FileClarificationConfig {
    /// Validated question budget, falling back to the default on zero.
    pub fn parse_max_questions(&self) -> (usize, Vec<ConfigIssue>) {
        if self.max_questions > 0 {
            return (self.max_questions, vec![]);
        }
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidConstraint {
                field: "clarification.max_questions".to_string(),
            },
            message: format!(
                "clarification.max_questions must be positive, falling back to {}",
                DEFAULT_MAX_CLARIFICATIONS
            ),
        };
        (DEFAULT_MAX_CLARIFICATIONS, vec![issue])
    }
}
