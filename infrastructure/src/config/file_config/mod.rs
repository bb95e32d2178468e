//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod clarification;
mod defaults;
mod output;

pub use clarification::FileClarificationConfig;
pub use defaults::FileDefaultsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use deckwright_application::DialogConfig;
use deckwright_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Clarification budget
    pub clarification: FileClarificationConfig,
    /// Baseline values for fields left open
    pub defaults: FileDefaultsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the clarification budget and the `[defaults]` enum and range
    /// values. Every issue comes with a fallback value.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_dialog_config().1
    }

    /// Convert to the application `DialogConfig`, returning validation issues.
    pub fn to_dialog_config(&self) -> (DialogConfig, Vec<ConfigIssue>) {
        let (max_questions, mut issues) = self.clarification.parse_max_questions();
        let (defaults, default_issues) = self.defaults.to_intent_defaults();
        issues.extend(default_issues);

        let config = DialogConfig::default()
            .with_max_questions(max_questions)
            .with_defaults(defaults);
        (config, issues)
    }

    /// Fail on any error-severity issue; warnings are returned to the caller.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let issues = self.validate();
        if ConfigIssue::has_errors(&issues) {
            let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
            return Err(ConfigValidationError::Invalid(messages.join("; ")));
        }
        Ok(issues)
    }
}
