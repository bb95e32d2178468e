//! Deck intent entity

use super::confidence::calculate_confidence;
use super::value_objects::{Archetype, Color, Constraint, Format};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeSet;

/// What a user is asking for when requesting a deck (Value Object)
///
/// Every field except `confidence` is optional so that partial inference can
/// be represented: some aspects are clear, others still need clarification.
/// `colors` distinguishes "no color preference" (`None`) from an explicit set.
///
/// Instances are immutable. The `with_*` methods consume the receiver and
/// return a new intent, and `confidence` is validated on every construction
/// path that accepts a caller-supplied value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DeckIntent {
    format: Option<Format>,
    colors: Option<BTreeSet<Color>>,
    archetype: Option<Archetype>,
    tribe: Option<String>,
    theme: Option<String>,
    constraints: BTreeSet<Constraint>,
    confidence: f64,
}

impl DeckIntent {
    /// An intent with nothing inferred and zero confidence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an intent from all of its parts.
    ///
    /// Fails with [`DomainError::InvalidConfidence`] when `confidence` is
    /// outside `[0.0, 1.0]` (NaN included).
    pub fn try_new(
        format: Option<Format>,
        colors: Option<BTreeSet<Color>>,
        archetype: Option<Archetype>,
        tribe: Option<String>,
        theme: Option<String>,
        constraints: BTreeSet<Constraint>,
        confidence: f64,
    ) -> Result<Self, DomainError> {
        Self {
            format,
            colors,
            archetype,
            tribe,
            theme,
            constraints,
            confidence: 0.0,
        }
        .with_confidence(confidence)
    }

    // ==================== Accessors ====================

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn colors(&self) -> Option<&BTreeSet<Color>> {
        self.colors.as_ref()
    }

    pub fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    pub fn tribe(&self) -> Option<&str> {
        self.tribe.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn constraints(&self) -> &BTreeSet<Constraint> {
        &self.constraints
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// True when a non-empty color set is present.
    pub fn has_colors(&self) -> bool {
        self.colors.as_ref().is_some_and(|colors| !colors.is_empty())
    }

    /// True when either a tribe or a theme is present.
    pub fn has_tribe_or_theme(&self) -> bool {
        self.tribe.is_some() || self.theme.is_some()
    }

    /// True when every clarifiable aspect is already known.
    pub fn is_complete(&self) -> bool {
        self.format.is_some()
            && self.has_colors()
            && self.archetype.is_some()
            && self.has_tribe_or_theme()
    }

    // ==================== Builder Methods ====================

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = Some(colors.into_iter().collect());
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

    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Replace the confidence, rejecting values outside `[0.0, 1.0]`.
    pub fn with_confidence(mut self, confidence: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DomainError::InvalidConfidence(confidence));
        }
        self.confidence = confidence;
        Ok(self)
    }

    /// Replace the confidence after clamping it into `[0.0, 1.0]`.
    ///
    /// Used by domain computations whose result is bounded by construction.
    pub(crate) fn with_clamped_confidence(mut self, confidence: f64) -> Self {
        self.confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        self
    }

    /// Return a copy where absent `format` / `archetype` take the given values.
    ///
    /// Fields that already have a value are never overwritten and the
    /// confidence is carried over unchanged.
    pub fn with_defaults(&self, format: Option<Format>, archetype: Option<Archetype>) -> Self {
        let mut intent = self.clone();
        intent.format = self.format.or(format);
        intent.archetype = self.archetype.or(archetype);
        intent
    }

    /// Fold a clarification answer into this intent.
    ///
    /// Absent fields are filled from `answer`, constraints are unioned, and the
    /// confidence is recomputed from the merged fields. Known fields win.
    pub fn merged_with(&self, answer: &DeckIntent) -> Self {
        let colors = if self.has_colors() {
            self.colors.clone()
        } else if answer.has_colors() {
            answer.colors.clone()
        } else {
            self.colors.clone().or_else(|| answer.colors.clone())
        };

        let merged = Self {
            format: self.format.or(answer.format),
            colors,
            archetype: self.archetype.or(answer.archetype),
            tribe: self.tribe.clone().or_else(|| answer.tribe.clone()),
            theme: self.theme.clone().or_else(|| answer.theme.clone()),
            constraints: self
                .constraints
                .union(&answer.constraints)
                .copied()
                .collect(),
            confidence: 0.0,
        };
        let confidence = calculate_confidence(&merged);
        merged.with_clamped_confidence(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_intent() {
        let intent = DeckIntent::empty();
        assert_eq!(intent.format(), None);
        assert_eq!(intent.colors(), None);
        assert_eq!(intent.archetype(), None);
        assert_eq!(intent.tribe(), None);
        assert_eq!(intent.theme(), None);
        assert!(intent.constraints().is_empty());
        assert_eq!(intent.confidence(), 0.0);
    }

    #[test]
    fn test_confidence_bounds_are_inclusive() {
        assert!(DeckIntent::empty().with_confidence(0.0).is_ok());
        assert!(DeckIntent::empty().with_confidence(1.0).is_ok());
    }

    #[test]
    fn test_invalid_confidence_rejected() {
        assert_eq!(
            DeckIntent::empty().with_confidence(1.5).unwrap_err(),
            DomainError::InvalidConfidence(1.5)
        );
        assert!(DeckIntent::empty().with_confidence(-0.1).is_err());
        assert!(DeckIntent::empty().with_confidence(f64::NAN).is_err());
    }

    #[test]
    fn test_try_new_validates_confidence() {
        let result = DeckIntent::try_new(
            Some(Format::Modern),
            None,
            None,
            None,
            None,
            BTreeSet::new(),
            2.0,
        );
        assert!(matches!(result, Err(DomainError::InvalidConfidence(_))));

        let intent = DeckIntent::try_new(
            Some(Format::Modern),
            None,
            Some(Archetype::Combo),
            None,
            None,
            BTreeSet::new(),
            0.4,
        )
        .unwrap();
        assert_eq!(intent.format(), Some(Format::Modern));
        assert_eq!(intent.archetype(), Some(Archetype::Combo));
    }

    #[test]
    fn test_builder_leaves_original_untouched() {
        let base = DeckIntent::empty().with_tribe("Goblin");
        let extended = base.clone().with_format(Format::Historic);
        assert_eq!(base.format(), None);
        assert_eq!(extended.format(), Some(Format::Historic));
        assert_eq!(extended.tribe(), Some("Goblin"));
    }

    #[test]
    fn test_with_defaults_only_fills_absent_fields() {
        let intent = DeckIntent::empty()
            .with_archetype(Archetype::Control)
            .with_confidence(0.3)
            .unwrap();
        let filled = intent.with_defaults(Some(Format::Standard), Some(Archetype::Midrange));
        assert_eq!(filled.format(), Some(Format::Standard));
        assert_eq!(filled.archetype(), Some(Archetype::Control));
        assert_eq!(filled.confidence(), 0.3);
    }

    #[test]
    fn test_empty_color_set_is_not_colors() {
        let intent = DeckIntent::empty().with_colors([]);
        assert!(intent.colors().is_some());
        assert!(!intent.has_colors());
    }

    #[test]
    fn test_is_complete() {
        let partial = DeckIntent::empty()
            .with_format(Format::Standard)
            .with_colors([Color::Red])
            .with_archetype(Archetype::Aggro);
        assert!(!partial.is_complete());
        assert!(partial.with_theme("burn").is_complete());
    }

    #[test]
    fn test_merged_with_fills_gaps_and_keeps_known_fields() {
        let current = DeckIntent::empty()
            .with_format(Format::Standard)
            .with_tribe("Goblin")
            .with_constraints([Constraint::Budget]);
        let answer = DeckIntent::empty()
            .with_format(Format::Modern)
            .with_colors([Color::Red])
            .with_constraints([Constraint::Casual]);

        let merged = current.merged_with(&answer);
        assert_eq!(merged.format(), Some(Format::Standard));
        assert_eq!(merged.tribe(), Some("Goblin"));
        assert!(merged.has_colors());
        assert_eq!(merged.constraints().len(), 2);
        assert_eq!(merged.confidence(), calculate_confidence(&merged));
    }

    #[test]
    fn test_merged_with_replaces_empty_color_set() {
        let current = DeckIntent::empty().with_colors([]);
        let answer = DeckIntent::empty().with_colors([Color::Blue, Color::Black]);
        let merged = current.merged_with(&answer);
        assert_eq!(merged.colors().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_serializes_colors_as_codes() {
        let intent = DeckIntent::empty().with_colors([Color::Green, Color::Red]);
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["colors"], serde_json::json!(["R", "G"]));
        assert_eq!(json["format"], serde_json::Value::Null);
    }
}
