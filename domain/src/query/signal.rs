//! Query signals: single typed preferences or requirements.

use serde::{Deserialize, Serialize};

/// What a signal talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum QuerySignalType {
    /// Creature type preference (e.g. "Goblin", "Dragon", "Elf")
    Tribe,
    /// Mechanical theme (e.g. "sacrifice", "graveyard", "tokens")
    Theme,
    /// Color preference, as a mana code
    Color,
    /// Archetype preference (e.g. "aggro", "control")
    Archetype,
    /// Format requirement (e.g. "standard", "historic")
    Format,
    /// Keyword ability (e.g. "flying", "trample")
    Keyword,
    /// Card type preference (e.g. "creature", "instant")
    CardType,
}

impl QuerySignalType {
    pub const ALL: [QuerySignalType; 7] = [
        QuerySignalType::Tribe,
        QuerySignalType::Theme,
        QuerySignalType::Color,
        QuerySignalType::Archetype,
        QuerySignalType::Format,
        QuerySignalType::Keyword,
        QuerySignalType::CardType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuerySignalType::Tribe => "tribe",
            QuerySignalType::Theme => "theme",
            QuerySignalType::Color => "color",
            QuerySignalType::Archetype => "archetype",
            QuerySignalType::Format => "format",
            QuerySignalType::Keyword => "keyword",
            QuerySignalType::CardType => "card_type",
        }
    }
}

impl std::fmt::Display for QuerySignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuerySignalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        QuerySignalType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("Unknown signal type: {}", s))
    }
}

impl From<QuerySignalType> for &'static str {
    fn from(signal_type: QuerySignalType) -> Self {
        signal_type.as_str()
    }
}

impl TryFrom<String> for QuerySignalType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How strongly a signal influences scoring.
///
/// - `Required`: hard requirement, equivalent to a filter
/// - `Strong` / `Moderate` / `Weak`: preferences; they only bias scores upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum SignalStrength {
    Required,
    #[default]
    Strong,
    Moderate,
    Weak,
}

impl SignalStrength {
    pub const ALL: [SignalStrength; 4] = [
        SignalStrength::Required,
        SignalStrength::Strong,
        SignalStrength::Moderate,
        SignalStrength::Weak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Required => "required",
            SignalStrength::Strong => "strong",
            SignalStrength::Moderate => "moderate",
            SignalStrength::Weak => "weak",
        }
    }
}

impl std::fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SignalStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SignalStrength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == lower)
            .ok_or_else(|| format!("Unknown signal strength: {}", s))
    }
}

impl From<SignalStrength> for &'static str {
    fn from(strength: SignalStrength) -> Self {
        strength.as_str()
    }
}

impl TryFrom<String> for SignalStrength {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single signal in a deck query (Value Object)
///
/// A card that doesn't match a preference signal is scored lower, never
/// excluded. `Required` signals are the exception: an illegal card cannot be
/// played whatever the user prefers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuerySignal {
    pub signal_type: QuerySignalType,
    pub value: String,
    pub strength: SignalStrength,
}

impl QuerySignal {
    pub fn new(
        signal_type: QuerySignalType,
        value: impl Into<String>,
        strength: SignalStrength,
    ) -> Self {
        Self {
            signal_type,
            value: value.into(),
            strength,
        }
    }

    /// A `Strong` preference signal.
    pub fn strong(signal_type: QuerySignalType, value: impl Into<String>) -> Self {
        Self::new(signal_type, value, SignalStrength::Strong)
    }

    /// A `Required` signal.
    pub fn required(signal_type: QuerySignalType, value: impl Into<String>) -> Self {
        Self::new(signal_type, value, SignalStrength::Required)
    }

    pub fn is_required(&self) -> bool {
        self.strength == SignalStrength::Required
    }
}

impl std::fmt::Display for QuerySignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={} ({})", self.signal_type, self.value, self.strength)
    }
}
