//! Intent default configuration from TOML (`[defaults]` section)

use deckwright_domain::{
    Archetype, ConfigIssue, ConfigIssueCode, Format, IntentDefaults, Severity,
};
use serde::{Deserialize, Serialize};

/// Raw intent defaults from TOML
///
/// # Example
///
/// ```toml
/// [defaults]
/// format = "standard"      # any supported format
/// archetype = "midrange"   # aggro, midrange, control, combo, tempo, ramp
/// confidence_boost = 0.1   # per applied default, in [0.0, 1.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    pub format: String,
    pub archetype: String,
    pub confidence_boost: f64,
}

impl Default for FileDefaultsConfig {
    fn default() -> Self {
        let defaults = IntentDefaults::default();
        Self {
            format: defaults.format.as_str().to_string(),
            archetype: defaults.archetype.as_str().to_string(),
            confidence_boost: defaults.confidence_boost,
        }
    }
}

impl FileDefaultsConfig {
    /// Parse format string into Format enum, returning warnings on failure.
    pub fn parse_format(&self) -> (Format, Vec<ConfigIssue>) {
        match self.format.parse::<Format>() {
            Ok(format) => (format, vec![]),
            Err(_) => {
                let fallback = IntentDefaults::default().format;
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "defaults.format".to_string(),
                        value: self.format.clone(),
                        valid_values: Format::ALL.iter().map(|f| f.as_str().to_string()).collect(),
                    },
                    message: format!(
                        "defaults.format: unknown value '{}', falling back to '{}'",
                        self.format, fallback
                    ),
                };
                (fallback, vec![issue])
            }
        }
    }

    /// Parse archetype string into Archetype enum, returning warnings on failure.
    pub fn parse_archetype(&self) -> (Archetype, Vec<ConfigIssue>) {
        match self.archetype.parse::<Archetype>() {
            Ok(archetype) => (archetype, vec![]),
            Err(_) => {
                let fallback = IntentDefaults::default().archetype;
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "defaults.archetype".to_string(),
                        value: self.archetype.clone(),
                        valid_values: Archetype::ALL
                            .iter()
                            .map(|a| a.as_str().to_string())
                            .collect(),
                    },
                    message: format!(
                        "defaults.archetype: unknown value '{}', falling back to '{}'",
                        self.archetype, fallback
                    ),
                };
                (fallback, vec![issue])
            }
        }
    }

    /// Confidence boost in [0.0, 1.0], falling back to the default otherwise.
    pub fn parse_confidence_boost(&self) -> (f64, Vec<ConfigIssue>) {
        if (0.0..=1.0).contains(&self.confidence_boost) {
            return (self.confidence_boost, vec![]);
        }
        let fallback = IntentDefaults::default().confidence_boost;
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidConstraint {
                field: "defaults.confidence_boost".to_string(),
            },
            message: format!(
                "defaults.confidence_boost must be in [0.0, 1.0], got {}, falling back to {}",
                self.confidence_boost, fallback
            ),
        };
        (fallback, vec![issue])
    }

    /// Convert to domain `IntentDefaults`, returning validation issues.
    pub fn to_intent_defaults(&self) -> (IntentDefaults, Vec<ConfigIssue>) {
        let (format, mut issues) = self.parse_format();
        let (archetype, archetype_issues) = self.parse_archetype();
        let (boost, boost_issues) = self.parse_confidence_boost();
        issues.extend(archetype_issues);
        issues.extend(boost_issues);

        let defaults = IntentDefaults::default()
            .with_format(format)
            .with_archetype(archetype)
            .with_confidence_boost(boost);
        (defaults, issues)
    }
}
