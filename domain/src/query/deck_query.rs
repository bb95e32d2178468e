//! Deck query: what the user wants, as an ordered list of signals.
//!
//! A query only influences scoring. It never answers "is this card allowed?"
//! except through `Required` signals.

use super::signal::{QuerySignal, QuerySignalType, SignalStrength};
use crate::intent::{Archetype, Color, DeckIntent, Format};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Optional secondary fields for the query factories.
///
/// Which fields a factory reads depends on the primary signal: the primary
/// field itself is ignored if also given here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub format: Option<Format>,
    pub colors: Vec<Color>,
    pub archetype: Option<Archetype>,
    pub tribe: Option<String>,
    pub theme: Option<String>,
}

impl QueryOptions {
    // ==================== Builder Methods ====================

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn with_tribe(mut self, tribe: impl Into<String>) -> Self {
        self.tribe = Some(tribe.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

/// Immutable, ordered collection of signals.
///
/// Duplicates are allowed; "adding" a signal returns a new query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckQuery {
    signals: Vec<QuerySignal>,
}

impl DeckQuery {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_signals(signals: impl IntoIterator<Item = QuerySignal>) -> Self {
        Self {
            signals: signals.into_iter().collect(),
        }
    }

    /// A new query with `signal` appended; `self` is left untouched.
    pub fn add_signal(&self, signal: QuerySignal) -> Self {
        let mut signals = self.signals.clone();
        signals.push(signal);
        Self { signals }
    }

    pub fn signals(&self) -> &[QuerySignal] {
        &self.signals
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    // ==================== Signal lookup ====================

    fn first_value(&self, signal_type: QuerySignalType) -> Option<&str> {
        self.signals
            .iter()
            .find(|s| s.signal_type == signal_type)
            .map(|s| s.value.as_str())
    }

    /// Value of the first tribe signal.
    pub fn tribe(&self) -> Option<&str> {
        self.first_value(QuerySignalType::Tribe)
    }

    /// Value of the first theme signal.
    pub fn theme(&self) -> Option<&str> {
        self.first_value(QuerySignalType::Theme)
    }

    /// Value of the first format signal.
    pub fn format(&self) -> Option<&str> {
        self.first_value(QuerySignalType::Format)
    }

    /// Value of the first archetype signal.
    pub fn archetype(&self) -> Option<&str> {
        self.first_value(QuerySignalType::Archetype)
    }

    /// Colors across all color signals. Values that aren't a color code or
    /// word are skipped.
    pub fn colors(&self) -> BTreeSet<Color> {
        self.get_signals(QuerySignalType::Color)
            .filter_map(|s| s.value.parse::<Color>().ok())
            .collect()
    }

    pub fn has_signal(&self, signal_type: QuerySignalType) -> bool {
        self.signals.iter().any(|s| s.signal_type == signal_type)
    }

    /// All signals of `signal_type`, in insertion order.
    pub fn get_signals(
        &self,
        signal_type: QuerySignalType,
    ) -> impl Iterator<Item = &QuerySignal> + '_ {
        self.signals
            .iter()
            .filter(move |s| s.signal_type == signal_type)
    }

    pub fn get_required(&self) -> impl Iterator<Item = &QuerySignal> + '_ {
        self.signals.iter().filter(|s| s.is_required())
    }

    pub fn get_preferences(&self) -> impl Iterator<Item = &QuerySignal> + '_ {
        self.signals.iter().filter(|s| !s.is_required())
    }

    // ==================== Factories ====================

    /// Query centered on a creature type.
    ///
    /// Tribe, theme and colors are `Strong`, format is `Required`, archetype
    /// is `Moderate`.
    pub fn for_tribal(tribe: impl Into<String>, options: QueryOptions) -> Self {
        let mut signals = vec![QuerySignal::strong(QuerySignalType::Tribe, tribe)];
        if let Some(theme) = &options.theme {
            signals.push(QuerySignal::strong(QuerySignalType::Theme, theme.clone()));
        }
        push_format_and_colors(&mut signals, &options);
        if let Some(archetype) = options.archetype {
            signals.push(moderate(QuerySignalType::Archetype, archetype.as_str()));
        }
        Self { signals }
    }

    /// Query centered on a mechanical theme.
    pub fn for_theme(theme: impl Into<String>, options: QueryOptions) -> Self {
        let mut signals = vec![QuerySignal::strong(QuerySignalType::Theme, theme)];
        push_format_and_colors(&mut signals, &options);
        if let Some(archetype) = options.archetype {
            signals.push(moderate(QuerySignalType::Archetype, archetype.as_str()));
        }
        if let Some(tribe) = &options.tribe {
            signals.push(moderate(QuerySignalType::Tribe, tribe.clone()));
        }
        Self { signals }
    }

    /// Query centered on an archetype; tribe and theme become `Moderate`.
    pub fn for_archetype(archetype: Archetype, options: QueryOptions) -> Self {
        let mut signals = vec![QuerySignal::strong(
            QuerySignalType::Archetype,
            archetype.as_str(),
        )];
        push_format_and_colors(&mut signals, &options);
        if let Some(tribe) = &options.tribe {
            signals.push(moderate(QuerySignalType::Tribe, tribe.clone()));
        }
        if let Some(theme) = &options.theme {
            signals.push(moderate(QuerySignalType::Theme, theme.clone()));
        }
        Self { signals }
    }

    /// Build a query from a resolved intent.
    ///
    /// The primary signal is the tribe if present, else the theme, else the
    /// archetype. Constraints produce no signals. An intent with none of the
    /// three yields a query holding only format and color signals.
    pub fn from_intent(intent: &DeckIntent) -> Self {
        let options = QueryOptions {
            format: intent.format(),
            colors: intent
                .colors()
                .map(|colors| colors.iter().copied().collect())
                .unwrap_or_default(),
            archetype: intent.archetype(),
            tribe: intent.tribe().map(str::to_string),
            theme: intent.theme().map(str::to_string),
        };

        if let Some(tribe) = intent.tribe() {
            return Self::for_tribal(tribe, options);
        }
        if let Some(theme) = intent.theme() {
            return Self::for_theme(theme, options);
        }
        if let Some(archetype) = intent.archetype() {
            return Self::for_archetype(archetype, options);
        }

        let mut signals = Vec::new();
        push_format_and_colors(&mut signals, &options);
        Self { signals }
    }
}

fn moderate(signal_type: QuerySignalType, value: impl Into<String>) -> QuerySignal {
    QuerySignal::new(signal_type, value, SignalStrength::Moderate)
}

fn push_format_and_colors(signals: &mut Vec<QuerySignal>, options: &QueryOptions) {
    if let Some(format) = options.format {
        signals.push(QuerySignal::required(
            QuerySignalType::Format,
            format.as_str(),
        ));
    }
    for color in &options.colors {
        signals.push(QuerySignal::strong(QuerySignalType::Color, color.code()));
    }
}

/// True if the query carries a tribe signal.
pub fn is_tribal_query(query: &DeckQuery) -> bool {
    query.has_signal(QuerySignalType::Tribe)
}

/// True if the query carries a theme signal.
pub fn is_theme_query(query: &DeckQuery) -> bool {
    query.has_signal(QuerySignalType::Theme)
}

/// True if the query carries an archetype signal.
pub fn is_archetype_query(query: &DeckQuery) -> bool {
    query.has_signal(QuerySignalType::Archetype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::extract_intent;

    #[test]
    fn test_empty_query() {
        let query = DeckQuery::empty();
        assert!(query.is_empty());
        assert_eq!(query.tribe(), None);
        assert!(query.colors().is_empty());
        assert!(!is_tribal_query(&query));
    }

    #[test]
    fn test_add_signal_returns_new_query() {
        let base = DeckQuery::empty();
        let extended = base.add_signal(QuerySignal::strong(QuerySignalType::Keyword, "flying"));
        assert!(base.is_empty());
        assert_eq!(extended.len(), 1);
        assert!(extended.has_signal(QuerySignalType::Keyword));
    }

    #[test]
    fn test_duplicates_allowed() {
        let signal = QuerySignal::strong(QuerySignalType::Tribe, "Goblin");
        let query = DeckQuery::empty()
            .add_signal(signal.clone())
            .add_signal(signal);
        assert_eq!(query.get_signals(QuerySignalType::Tribe).count(), 2);
    }

    #[test]
    fn test_for_tribal_signals() {
        let query = DeckQuery::for_tribal(
            "Goblin",
            QueryOptions::default()
                .with_format(Format::Standard)
                .with_colors([Color::Red])
                .with_archetype(Archetype::Aggro),
        );

        assert_eq!(
            query.signals(),
            &[
                QuerySignal::strong(QuerySignalType::Tribe, "Goblin"),
                QuerySignal::required(QuerySignalType::Format, "standard"),
                QuerySignal::strong(QuerySignalType::Color, "R"),
                QuerySignal::new(
                    QuerySignalType::Archetype,
                    "aggro",
                    SignalStrength::Moderate
                ),
            ]
        );
        assert_eq!(query.tribe(), Some("Goblin"));
        assert_eq!(query.format(), Some("standard"));
        assert_eq!(query.archetype(), Some("aggro"));
        assert!(is_tribal_query(&query));
        assert!(is_archetype_query(&query));
        assert!(!is_theme_query(&query));
    }

    #[test]
    fn test_required_and_preferences_partition() {
        let query = DeckQuery::for_tribal(
            "Elf",
            QueryOptions::default()
                .with_format(Format::Historic)
                .with_colors([Color::Green, Color::Black]),
        );
        let required: Vec<_> = query.get_required().collect();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].signal_type, QuerySignalType::Format);
        assert_eq!(
            query.get_required().count() + query.get_preferences().count(),
            query.len()
        );
    }

    #[test]
    fn test_colors_accessor_accepts_codes_and_words() {
        let query = DeckQuery::from_signals([
            QuerySignal::strong(QuerySignalType::Color, "r"),
            QuerySignal::strong(QuerySignalType::Color, "Green"),
            QuerySignal::strong(QuerySignalType::Color, "purple"),
        ]);
        assert_eq!(
            query.colors(),
            BTreeSet::from([Color::Red, Color::Green])
        );
    }

    #[test]
    fn test_for_archetype_secondaries_are_moderate() {
        let query = DeckQuery::for_archetype(
            Archetype::Control,
            QueryOptions::default().with_tribe("Wizard"),
        );
        let tribe = query.get_signals(QuerySignalType::Tribe).next().unwrap();
        assert_eq!(tribe.strength, SignalStrength::Moderate);
        assert_eq!(query.signals()[0].strength, SignalStrength::Strong);
    }

    #[test]
    fn test_from_intent_tribal() {
        let intent = extract_intent("standard mono red goblin aggro");
        let query = DeckQuery::from_intent(&intent);
        assert_eq!(query.tribe(), Some("Goblin"));
        assert_eq!(query.format(), Some("standard"));
        assert_eq!(query.colors(), BTreeSet::from([Color::Red]));
        let archetype = query
            .get_signals(QuerySignalType::Archetype)
            .next()
            .unwrap();
        assert_eq!(archetype.strength, SignalStrength::Moderate);
    }

    #[test]
    fn test_from_intent_tribe_and_theme() {
        let intent = DeckIntent::empty().with_tribe("Zombie").with_theme("graveyard");
        let query = DeckQuery::from_intent(&intent);
        let theme = query.get_signals(QuerySignalType::Theme).next().unwrap();
        assert_eq!(theme.strength, SignalStrength::Strong);
        assert_eq!(query.signals()[0].signal_type, QuerySignalType::Tribe);
    }

    #[test]
    fn test_from_intent_theme_only() {
        let intent = DeckIntent::empty()
            .with_theme("tokens")
            .with_archetype(Archetype::Midrange);
        let query = DeckQuery::from_intent(&intent);
        assert_eq!(query.signals()[0], QuerySignal::strong(QuerySignalType::Theme, "tokens"));
        assert!(!is_tribal_query(&query));
    }

    #[test]
    fn test_from_intent_archetype_only() {
        let intent = DeckIntent::empty().with_archetype(Archetype::Combo);
        let query = DeckQuery::from_intent(&intent);
        assert_eq!(
            query.signals(),
            &[QuerySignal::strong(QuerySignalType::Archetype, "combo")]
        );
    }

    #[test]
    fn test_from_intent_constraints_only_yields_empty() {
        let intent = extract_intent("budget deck");
        assert!(!intent.constraints().is_empty());
        assert!(DeckQuery::from_intent(&intent).is_empty());
    }

    #[test]
    fn test_query_json_shape() {
        let query = DeckQuery::for_theme("sacrifice", QueryOptions::default());
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"signals": [
                {"signal_type": "theme", "value": "sacrifice", "strength": "strong"}
            ]})
        );
    }
}
