//! Structured configuration issues.
//!
//! Config parsing never fails on a bad value; it falls back to a default and
//! reports a [`ConfigIssue`] so the caller decides whether to warn or abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a fallback value is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its enumeration.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field violates its range.
    InvalidConstraint { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// True if any issue in `issues` is an [`Severity::Error`].
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::InvalidConstraint {
                field: "clarification.max_questions".to_string(),
            },
            message: "max_questions must be positive".to_string(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(ConfigIssue::has_errors(&[
            issue(Severity::Warning),
            issue(Severity::Error)
        ]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!ConfigIssue::has_errors(&[issue(Severity::Warning)]));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
