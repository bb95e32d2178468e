//! Clarification types, requests and decisions.

use crate::intent::{Archetype, Color, Constraint, Format};
use serde::{Deserialize, Serialize};

/// Aspect of a deck request that can be clarified.
///
/// Declaration order is the priority order used by
/// [`get_next_clarification`](super::decision::get_next_clarification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ClarificationType {
    /// Most impactful: decides card legality.
    Format,
    /// Narrows the card pool the most.
    Colors,
    Archetype,
    /// Build-around: either a creature type or a mechanical theme.
    TribeOrTheme,
    /// Optional add-ons; never needed on their own.
    Constraints,
}

impl ClarificationType {
    /// All types in priority order.
    pub const PRIORITY: [ClarificationType; 5] = [
        ClarificationType::Format,
        ClarificationType::Colors,
        ClarificationType::Archetype,
        ClarificationType::TribeOrTheme,
        ClarificationType::Constraints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClarificationType::Format => "format",
            ClarificationType::Colors => "colors",
            ClarificationType::Archetype => "archetype",
            ClarificationType::TribeOrTheme => "tribe_or_theme",
            ClarificationType::Constraints => "constraints",
        }
    }

    /// Stable key for UI deduplication, e.g. `ask_format`.
    pub fn question_key(&self) -> String {
        format!("ask_{}", self.as_str())
    }

    /// Choices a UI can offer for this type; empty when the answer is free-form.
    pub fn options(&self) -> Vec<String> {
        match self {
            ClarificationType::Format => {
                Format::ALL.iter().map(|f| f.as_str().to_string()).collect()
            }
            ClarificationType::Colors => {
                Color::ALL.iter().map(|c| c.word().to_string()).collect()
            }
            ClarificationType::Archetype => {
                Archetype::ALL.iter().map(|a| a.as_str().to_string()).collect()
            }
            ClarificationType::TribeOrTheme => Vec::new(),
            ClarificationType::Constraints => Constraint::ALL
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

impl std::fmt::Display for ClarificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ClarificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ClarificationType::PRIORITY
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("Unknown clarification type: {}", s))
    }
}

impl From<ClarificationType> for &'static str {
    fn from(clarification_type: ClarificationType) -> Self {
        clarification_type.as_str()
    }
}

impl TryFrom<String> for ClarificationType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A request to clarify one aspect of the user's intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationRequest {
    pub clarification_type: ClarificationType,
    /// Identifier for the question (for deduplication in the UI).
    pub question_key: String,
    /// Ordered choices to offer; empty for free-form answers.
    pub options: Vec<String>,
}

impl ClarificationRequest {
    /// A request with the standard key and options for `clarification_type`.
    pub fn for_type(clarification_type: ClarificationType) -> Self {
        Self {
            clarification_type,
            question_key: clarification_type.question_key(),
            options: clarification_type.options(),
        }
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Outcome of evaluating one clarification type. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationDecision {
    pub should_ask: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
    /// Present only when `should_ask` is true.
    pub clarification: Option<ClarificationRequest>,
}

impl ClarificationDecision {
    pub fn ask(request: ClarificationRequest) -> Self {
        Self {
            should_ask: true,
            reason: "Missing information, budget available".to_string(),
            clarification: Some(request),
        }
    }

    pub fn skip(reason: impl Into<String>) -> Self {
        Self {
            should_ask: false,
            reason: reason.into(),
            clarification: None,
        }
    }

    /// The type being asked about, if this decision asks.
    pub fn clarification_type(&self) -> Option<ClarificationType> {
        self.clarification
            .as_ref()
            .map(|request| request.clarification_type)
    }
}
