//! Closed vocabularies of a deck request: format, archetype, constraint, color.
//!
//! Every enum carries an explicit string table (`as_str` / `FromStr`) and
//! serializes through it, so wire names never depend on Rust identifiers.

use serde::{Deserialize, Serialize};

/// Supported MTG formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Format {
    Standard,
    Historic,
    Explorer,
    Pioneer,
    Modern,
    Legacy,
    Vintage,
    Brawl,
    Timeless,
}

impl Format {
    /// All formats, in pattern-table order.
    pub const ALL: [Format; 9] = [
        Format::Standard,
        Format::Historic,
        Format::Explorer,
        Format::Pioneer,
        Format::Modern,
        Format::Legacy,
        Format::Vintage,
        Format::Brawl,
        Format::Timeless,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Historic => "historic",
            Format::Explorer => "explorer",
            Format::Pioneer => "pioneer",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Vintage => "vintage",
            Format::Brawl => "brawl",
            Format::Timeless => "timeless",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == lower)
            .ok_or_else(|| format!("Unknown format: {}", s))
    }
}

impl From<Format> for &'static str {
    fn from(format: Format) -> Self {
        format.as_str()
    }
}

impl TryFrom<String> for Format {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Common deck archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Archetype {
    Aggro,
    Midrange,
    Control,
    Combo,
    Tempo,
    Ramp,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Aggro,
        Archetype::Midrange,
        Archetype::Control,
        Archetype::Combo,
        Archetype::Tempo,
        Archetype::Ramp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Aggro => "aggro",
            Archetype::Midrange => "midrange",
            Archetype::Control => "control",
            Archetype::Combo => "combo",
            Archetype::Tempo => "tempo",
            Archetype::Ramp => "ramp",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == lower)
            .ok_or_else(|| format!("Unknown archetype: {}", s))
    }
}

impl From<Archetype> for &'static str {
    fn from(archetype: Archetype) -> Self {
        archetype.as_str()
    }
}

impl TryFrom<String> for Archetype {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Deck-building constraints. A request may carry several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Constraint {
    Budget,
    Competitive,
    Casual,
    Singleton,
}

impl Constraint {
    pub const ALL: [Constraint; 4] = [
        Constraint::Budget,
        Constraint::Competitive,
        Constraint::Casual,
        Constraint::Singleton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::Budget => "budget",
            Constraint::Competitive => "competitive",
            Constraint::Casual => "casual",
            Constraint::Singleton => "singleton",
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Constraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Constraint::ALL
            .into_iter()
            .find(|constraint| constraint.as_str() == lower)
            .ok_or_else(|| format!("Unknown constraint: {}", s))
    }
}

impl From<Constraint> for &'static str {
    fn from(constraint: Constraint) -> Self {
        constraint.as_str()
    }
}

impl TryFrom<String> for Constraint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One of the five MTG colors, ordered W, U, B, R, G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Single-letter mana code.
    pub fn code(&self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    /// Lowercase color word.
    pub fn word(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
        }
    }

    /// Look up a color by its mana code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| color.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    /// Accepts either the mana code (`"R"`) or the color word (`"red"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = Color::from_code(s) {
            return Ok(color);
        }
        let lower = s.trim().to_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.word() == lower)
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

impl From<Color> for &'static str {
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!("Standard".parse::<Format>().ok(), Some(Format::Standard));
        assert_eq!(" TIMELESS ".parse::<Format>().ok(), Some(Format::Timeless));
        assert!("commander".parse::<Format>().is_err());
    }

    #[test]
    fn test_archetype_display() {
        assert_eq!(Archetype::Midrange.to_string(), "midrange");
        assert_eq!(Archetype::Ramp.to_string(), "ramp");
    }

    #[test]
    fn test_constraint_parse() {
        assert_eq!(
            "singleton".parse::<Constraint>().ok(),
            Some(Constraint::Singleton)
        );
        assert!("cheap".parse::<Constraint>().is_err());
    }

    #[test]
    fn test_color_parse_code_and_word() {
        assert_eq!("u".parse::<Color>().ok(), Some(Color::Blue));
        assert_eq!("Green".parse::<Color>().ok(), Some(Color::Green));
        assert!("purple".parse::<Color>().is_err());
        assert_eq!(Color::from_code("x"), None);
    }

    #[test]
    fn test_color_order_is_wubrg() {
        let mut colors = vec![Color::Green, Color::White, Color::Red, Color::Blue];
        colors.sort();
        assert_eq!(
            colors,
            vec![Color::White, Color::Blue, Color::Red, Color::Green]
        );
    }

    #[test]
    fn test_serde_uses_string_table() {
        assert_eq!(
            serde_json::to_string(&Format::Pioneer).unwrap(),
            "\"pioneer\""
        );
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"B\"");
        let archetype: Archetype = serde_json::from_str("\"tempo\"").unwrap();
        assert_eq!(archetype, Archetype::Tempo);
        assert!(serde_json::from_str::<Constraint>("\"expensive\"").is_err());
    }
}
