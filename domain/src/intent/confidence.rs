//! Confidence model for inferred intents.
//!
//! Confidence reflects how much of the request was understood, not how
//! likely the interpretation is to be right. More specific intents score
//! higher; the result is always inside `[0.0, 1.0]`.

use super::entities::DeckIntent;

/// Any non-empty request carries some information.
pub const BASE_CONFIDENCE: f64 = 0.1;
pub const FORMAT_WEIGHT: f64 = 0.15;
pub const COLORS_WEIGHT: f64 = 0.15;
/// Per-color specificity bonus, capped at [`MAX_COLOR_BONUS`].
pub const PER_COLOR_BONUS: f64 = 0.01;
pub const MAX_COLOR_BONUS: f64 = 0.05;
pub const ARCHETYPE_WEIGHT: f64 = 0.15;
/// Tribal intent is the most specific signal a request can carry.
pub const TRIBE_WEIGHT: f64 = 0.20;
pub const THEME_WEIGHT: f64 = 0.15;
pub const CONSTRAINT_WEIGHT: f64 = 0.05;

/// Compute the confidence of an intent from the fields it carries.
///
/// Pure and independent of extraction order; the intent's current
/// `confidence` value is ignored.
pub fn calculate_confidence(intent: &DeckIntent) -> f64 {
    let mut score = BASE_CONFIDENCE;

    if intent.format().is_some() {
        score += FORMAT_WEIGHT;
    }
    if let Some(colors) = intent.colors() {
        score += COLORS_WEIGHT;
        score += (colors.len() as f64 * PER_COLOR_BONUS).min(MAX_COLOR_BONUS);
    }
    if intent.archetype().is_some() {
        score += ARCHETYPE_WEIGHT;
    }
    if intent.tribe().is_some() {
        score += TRIBE_WEIGHT;
    }
    if intent.theme().is_some() {
        score += THEME_WEIGHT;
    }
    score += intent.constraints().len() as f64 * CONSTRAINT_WEIGHT;

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::value_objects::{Archetype, Color, Constraint, Format};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_confidence() {
        assert!(approx(calculate_confidence(&DeckIntent::empty()), 0.1));
    }

    #[test]
    fn test_each_field_adds_its_weight() {
        let format = DeckIntent::empty().with_format(Format::Modern);
        assert!(approx(calculate_confidence(&format), 0.25));

        let tribe = DeckIntent::empty().with_tribe("Elf");
        assert!(approx(calculate_confidence(&tribe), 0.30));

        let theme = DeckIntent::empty().with_theme("mill");
        assert!(approx(calculate_confidence(&theme), 0.25));

        let archetype = DeckIntent::empty().with_archetype(Archetype::Tempo);
        assert!(approx(calculate_confidence(&archetype), 0.25));
    }

    #[test]
    fn test_color_specificity_bonus_is_capped() {
        let two = DeckIntent::empty().with_colors([Color::Red, Color::Green]);
        assert!(approx(calculate_confidence(&two), 0.1 + 0.15 + 0.02));

        let five = DeckIntent::empty().with_colors(Color::ALL);
        assert!(approx(calculate_confidence(&five), 0.1 + 0.15 + 0.05));
    }

    #[test]
    fn test_constraints_add_per_entry() {
        let intent = DeckIntent::empty().with_constraints([Constraint::Budget, Constraint::Casual]);
        assert!(approx(calculate_confidence(&intent), 0.2));
    }

    #[test]
    fn test_full_intent_is_clamped() {
        let intent = DeckIntent::empty()
            .with_format(Format::Standard)
            .with_colors(Color::ALL)
            .with_archetype(Archetype::Aggro)
            .with_tribe("Goblin")
            .with_theme("tokens")
            .with_constraints(Constraint::ALL);
        assert_eq!(calculate_confidence(&intent), 1.0);
    }

    #[test]
    fn test_ignores_existing_confidence() {
        let intent = DeckIntent::empty().with_confidence(0.9).unwrap();
        assert!(approx(calculate_confidence(&intent), 0.1));
    }
}
