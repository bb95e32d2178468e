//! Intent resolution: the single decision point for ask-vs-assume.

use super::decision::get_next_clarification;
use super::policy::ClarificationPolicy;
use crate::intent::{DeckIntent, IntentDefaults, apply_intent_defaults_with};

/// Resolve `intent` against `policy` using the built-in defaults.
///
/// # Returns
///
/// `(resolved_intent, needs_clarification)`:
/// - `needs_clarification == true`: the intent is returned unchanged; the
///   caller asks the question and records it on its own policy
/// - `needs_clarification == false`: absent format/archetype are defaulted
pub fn resolve_intent(intent: &DeckIntent, policy: &ClarificationPolicy) -> (DeckIntent, bool) {
    resolve_intent_with(intent, policy, &IntentDefaults::default())
}

/// [`resolve_intent`] with caller-supplied defaults. Only reads the policy.
pub fn resolve_intent_with(
    intent: &DeckIntent,
    policy: &ClarificationPolicy,
    defaults: &IntentDefaults,
) -> (DeckIntent, bool) {
    match get_next_clarification(intent, policy) {
        Some(_) => (intent.clone(), true),
        None => (apply_intent_defaults_with(intent, defaults), false),
    }
}
