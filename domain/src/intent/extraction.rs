//! Deterministic intent extraction from raw request text.
//!
//! Keyword and pattern matching only: no model calls, no card lookups, no
//! randomness. The same text always yields the same [`DeckIntent`].
//!
//! Each `extract_*` function is independent and can be called on its own;
//! [`extract_intent`] runs them in a fixed order and attaches the confidence.

use super::confidence::calculate_confidence;
use super::entities::DeckIntent;
use super::patterns::{
    ARCHETYPE_PATTERNS, COLOR_GROUPS, COLOR_WORDS, CONSTRAINT_PATTERNS, FORMAT_PATTERNS,
    THEME_PATTERNS, TRIBE_PATTERNS,
};
use super::value_objects::{Archetype, Color, Constraint, Format};
use regex::Regex;
use std::collections::BTreeSet;

/// Return the label of the first pattern in `table` that matches `text`.
fn first_match<T: Clone>(table: &[(Regex, T)], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(regex, _)| regex.is_match(text))
        .map(|(_, label)| label.clone())
}

pub fn extract_format(text: &str) -> Option<Format> {
    first_match(&FORMAT_PATTERNS, text)
}

/// Union of guild/clan/shard names (substring) and color words (word boundary).
///
/// Returns `None` rather than an empty set when nothing matched.
pub fn extract_colors(text: &str) -> Option<BTreeSet<Color>> {
    let lower = text.to_lowercase();
    let mut colors = BTreeSet::new();

    for (name, group) in COLOR_GROUPS {
        if lower.contains(name) {
            colors.extend(group.iter().copied());
        }
    }

    for (regex, color) in COLOR_WORDS.iter() {
        if regex.is_match(&lower) {
            colors.insert(*color);
        }
    }

    // Both tables only yield `Color`, so the alphabet filter is structural.
    if colors.is_empty() { None } else { Some(colors) }
}

pub fn extract_archetype(text: &str) -> Option<Archetype> {
    first_match(&ARCHETYPE_PATTERNS, text)
}

/// First creature type in table order; a request commits to one tribe.
pub fn extract_tribe(text: &str) -> Option<String> {
    first_match(&TRIBE_PATTERNS, text).map(str::to_string)
}

/// First non-tribal theme in table order.
pub fn extract_theme(text: &str) -> Option<String> {
    first_match(&THEME_PATTERNS, text).map(str::to_string)
}

/// Every matching constraint; a request can be both budget and casual.
pub fn extract_constraints(text: &str) -> BTreeSet<Constraint> {
    CONSTRAINT_PATTERNS
        .iter()
        .filter(|(regex, _)| regex.is_match(text))
        .map(|(_, constraint)| *constraint)
        .collect()
}

/// Infer a deck intent from raw user text.
///
/// # Example
///
/// ```
/// use deckwright_domain::intent::extract_intent;
/// use deckwright_domain::{Archetype, Format};
///
/// let intent = extract_intent("standard gruul midrange");
/// assert_eq!(intent.format(), Some(Format::Standard));
/// assert_eq!(intent.archetype(), Some(Archetype::Midrange));
/// assert_eq!(intent.colors().map(|c| c.len()), Some(2));
/// ```
pub fn extract_intent(text: &str) -> DeckIntent {
    let mut intent = DeckIntent::empty();

    if let Some(format) = extract_format(text) {
        intent = intent.with_format(format);
    }
    if let Some(colors) = extract_colors(text) {
        intent = intent.with_colors(colors);
    }
    if let Some(archetype) = extract_archetype(text) {
        intent = intent.with_archetype(archetype);
    }
    if let Some(tribe) = extract_tribe(text) {
        intent = intent.with_tribe(tribe);
    }
    if let Some(theme) = extract_theme(text) {
        intent = intent.with_theme(theme);
    }
    intent = intent.with_constraints(extract_constraints(text));

    let confidence = calculate_confidence(&intent);
    intent.with_clamped_confidence(confidence)
}
