//! Ask-vs-assume decision engine.
//!
//! Pure functions of `(intent, policy)`: the same inputs always produce the
//! same decision, and nothing here mutates the policy.
//!
//! Rules for one type, in order:
//! 1. Already asked → don't ask
//! 2. Budget exhausted → don't ask
//! 3. Intent already has the information → don't ask
//! 4. Otherwise → ask

use super::entities::{ClarificationDecision, ClarificationRequest, ClarificationType};
use super::policy::ClarificationPolicy;
use crate::intent::DeckIntent;

/// True if `intent` lacks the information `clarification_type` asks for.
///
/// Constraints are optional add-ons and are never needed.
pub fn intent_needs_clarification(
    clarification_type: ClarificationType,
    intent: &DeckIntent,
) -> bool {
    match clarification_type {
        ClarificationType::Format => intent.format().is_none(),
        ClarificationType::Colors => !intent.has_colors(),
        ClarificationType::Archetype => intent.archetype().is_none(),
        ClarificationType::TribeOrTheme => !intent.has_tribe_or_theme(),
        ClarificationType::Constraints => false,
    }
}

/// Evaluate one clarification type and explain the outcome.
pub fn evaluate_clarification(
    clarification_type: ClarificationType,
    intent: &DeckIntent,
    policy: &ClarificationPolicy,
) -> ClarificationDecision {
    if policy.has_asked(clarification_type) {
        return ClarificationDecision::skip(format!("Already asked {}", clarification_type));
    }

    if policy.is_exhausted() {
        return ClarificationDecision::skip("Clarification budget exhausted");
    }

    if !intent_needs_clarification(clarification_type, intent) {
        return ClarificationDecision::skip(format!(
            "Intent already has {}",
            clarification_type
        ));
    }

    ClarificationDecision::ask(ClarificationRequest::for_type(clarification_type))
}

/// Boolean shorthand for [`evaluate_clarification`].
pub fn should_ask_clarification(
    clarification_type: ClarificationType,
    intent: &DeckIntent,
    policy: &ClarificationPolicy,
) -> bool {
    evaluate_clarification(clarification_type, intent, policy).should_ask
}

/// The first clarification worth asking, in [`ClarificationType::PRIORITY`] order.
///
/// `None` means either the intent is complete enough or the budget is spent;
/// in both cases the caller proceeds with defaults.
pub fn get_next_clarification(
    intent: &DeckIntent,
    policy: &ClarificationPolicy,
) -> Option<ClarificationDecision> {
    ClarificationType::PRIORITY
        .into_iter()
        .map(|t| evaluate_clarification(t, intent, policy))
        .find(|decision| decision.should_ask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{Archetype, Color, Format, extract_intent};

    fn full_intent() -> DeckIntent {
        DeckIntent::empty()
            .with_format(Format::Standard)
            .with_colors([Color::Red])
            .with_archetype(Archetype::Aggro)
            .with_tribe("Goblin")
    }

    // ==================== Needs ====================

    #[test]
    fn test_needs_format() {
        assert!(intent_needs_clarification(
            ClarificationType::Format,
            &DeckIntent::empty()
        ));
        assert!(!intent_needs_clarification(
            ClarificationType::Format,
            &full_intent()
        ));
    }

    #[test]
    fn test_empty_color_set_needs_colors() {
        let intent = DeckIntent::empty().with_colors([]);
        assert!(intent_needs_clarification(ClarificationType::Colors, &intent));
    }

    #[test]
    fn test_theme_satisfies_tribe_or_theme() {
        let intent = DeckIntent::empty().with_theme("tokens");
        assert!(!intent_needs_clarification(
            ClarificationType::TribeOrTheme,
            &intent
        ));
    }

    #[test]
    fn test_constraints_never_needed() {
        assert!(!intent_needs_clarification(
            ClarificationType::Constraints,
            &DeckIntent::empty()
        ));
    }

    // ==================== Evaluate ====================

    #[test]
    fn test_evaluate_already_asked_wins() {
        let mut policy = ClarificationPolicy::default();
        policy.record(ClarificationType::Format).unwrap();
        let decision =
            evaluate_clarification(ClarificationType::Format, &DeckIntent::empty(), &policy);
        assert!(!decision.should_ask);
        assert_eq!(decision.reason, "Already asked format");
    }

    #[test]
    fn test_evaluate_budget_exhausted() {
        let mut policy = ClarificationPolicy::new(1).unwrap();
        policy.record(ClarificationType::Format).unwrap();
        let decision =
            evaluate_clarification(ClarificationType::Colors, &DeckIntent::empty(), &policy);
        assert!(!decision.should_ask);
        assert_eq!(decision.reason, "Clarification budget exhausted");
    }

    #[test]
    fn test_evaluate_intent_has_info() {
        let decision = evaluate_clarification(
            ClarificationType::Archetype,
            &full_intent(),
            &ClarificationPolicy::default(),
        );
        assert!(!decision.should_ask);
        assert_eq!(decision.reason, "Intent already has archetype");
    }

    #[test]
    fn test_evaluate_asks_with_request() {
        let decision = evaluate_clarification(
            ClarificationType::Colors,
            &DeckIntent::empty(),
            &ClarificationPolicy::default(),
        );
        assert!(decision.should_ask);
        let request = decision.clarification.unwrap();
        assert_eq!(request.clarification_type, ClarificationType::Colors);
        assert_eq!(request.question_key, "ask_colors");
    }

    #[test]
    fn test_should_ask_matches_evaluate() {
        let policy = ClarificationPolicy::default();
        let intent = extract_intent("goblins");
        for t in ClarificationType::PRIORITY {
            assert_eq!(
                should_ask_clarification(t, &intent, &policy),
                evaluate_clarification(t, &intent, &policy).should_ask
            );
        }
    }

    // ==================== Next ====================

    #[test]
    fn test_priority_order_on_empty_intent() {
        let intent = extract_intent("build me a deck");
        let mut policy = ClarificationPolicy::default();
        let mut asked = Vec::new();

        while let Some(decision) = get_next_clarification(&intent, &policy) {
            let t = decision.clarification_type().unwrap();
            asked.push(t);
            policy.record(t).unwrap();
        }

        assert_eq!(
            asked,
            vec![
                ClarificationType::Format,
                ClarificationType::Colors,
                ClarificationType::Archetype
            ]
        );
        assert!(policy.is_exhausted());
    }

    #[test]
    fn test_next_skips_satisfied_types() {
        let intent = extract_intent("standard goblins");
        let decision = get_next_clarification(&intent, &ClarificationPolicy::default()).unwrap();
        assert_eq!(decision.clarification_type(), Some(ClarificationType::Colors));
    }

    #[test]
    fn test_next_none_for_complete_intent() {
        assert!(get_next_clarification(&full_intent(), &ClarificationPolicy::default()).is_none());
    }

    #[test]
    fn test_next_never_returns_asked_or_satisfied() {
        let texts = [
            "build me a deck",
            "modern elves",
            "izzet tempo",
            "casual sacrifice",
            "vintage",
        ];
        for text in texts {
            let intent = extract_intent(text);
            let mut policy = ClarificationPolicy::new(5).unwrap();
            while let Some(decision) = get_next_clarification(&intent, &policy) {
                let t = decision.clarification_type().unwrap();
                assert!(!policy.has_asked(t));
                assert!(intent_needs_clarification(t, &intent));
                policy.record(t).unwrap();
            }
        }
    }

    #[test]
    fn test_next_is_deterministic() {
        let intent = extract_intent("pioneer");
        let policy = ClarificationPolicy::default();
        assert_eq!(
            get_next_clarification(&intent, &policy),
            get_next_clarification(&intent, &policy)
        );
    }
}
