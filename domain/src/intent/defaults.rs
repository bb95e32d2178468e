//! Baseline values applied when the user is not asked (or did not say).

use super::entities::DeckIntent;
use super::value_objects::{Archetype, Format};
use serde::{Deserialize, Serialize};

/// Confidence added for each default that is actually applied.
pub const DEFAULT_CONFIDENCE_BOOST: f64 = 0.1;

/// A default that [`apply_intent_defaults_with`] filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AppliedDefault {
    Format(Format),
    Archetype(Archetype),
}

/// Baseline format and archetype used when an intent leaves them open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentDefaults {
    pub format: Format,
    pub archetype: Archetype,
    /// Confidence added per applied default, before clamping to 1.0.
    pub confidence_boost: f64,
}

impl Default for IntentDefaults {
    fn default() -> Self {
        Self {
            format: Format::Standard,
            archetype: Archetype::Midrange,
            confidence_boost: DEFAULT_CONFIDENCE_BOOST,
        }
    }
}

impl IntentDefaults {
    // ==================== Builder Methods ====================

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn with_confidence_boost(mut self, boost: f64) -> Self {
        self.confidence_boost = boost;
        self
    }

    /// Defaults that would be applied to `intent`, in field order.
    pub fn pending_for(&self, intent: &DeckIntent) -> Vec<AppliedDefault> {
        let mut pending = Vec::new();
        if intent.format().is_none() {
            pending.push(AppliedDefault::Format(self.format));
        }
        if intent.archetype().is_none() {
            pending.push(AppliedDefault::Archetype(self.archetype));
        }
        pending
    }
}

/// Apply the built-in defaults (Standard, Midrange) to absent fields.
pub fn apply_intent_defaults(intent: &DeckIntent) -> DeckIntent {
    apply_intent_defaults_with(intent, &IntentDefaults::default())
}

/// Apply `defaults` to the absent `format` / `archetype` of `intent`.
///
/// Confidence rises by `confidence_boost` per default applied and is clamped
/// to 1.0. Every other field passes through unchanged.
pub fn apply_intent_defaults_with(intent: &DeckIntent, defaults: &IntentDefaults) -> DeckIntent {
    let applied = defaults.pending_for(intent).len();
    let confidence = intent.confidence() + applied as f64 * defaults.confidence_boost;

    intent
        .with_defaults(Some(defaults.format), Some(defaults.archetype))
        .with_clamped_confidence(confidence)
}
