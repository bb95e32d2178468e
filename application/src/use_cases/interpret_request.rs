//! Interpret Request use case.
//!
//! One round of the pipeline: extract an intent from text, then either ask
//! for the next clarification or resolve with defaults and build the query.
//! Nothing is asked here; callers that hold a conversation loop use
//! [`RunDialogUseCase`](super::run_dialog::RunDialogUseCase) instead.

use deckwright_domain::{
    AppliedDefault, ClarificationPolicy, ClarificationRequest, DeckIntent, DeckQuery,
    IntentDefaults, extract_intent, get_next_clarification, resolve_intent_with,
};
use serde::Serialize;
use tracing::{debug, info};

/// Result of interpreting one request against a policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Interpretation {
    /// A question should be asked before building a query.
    NeedsClarification {
        /// The extracted intent, unchanged.
        intent: DeckIntent,
        request: ClarificationRequest,
    },
    /// Nothing left to ask; defaults applied and the query built.
    Resolved {
        intent: DeckIntent,
        query: DeckQuery,
        defaults_applied: Vec<AppliedDefault>,
    },
}

impl Interpretation {
    pub fn intent(&self) -> &DeckIntent {
        match self {
            Interpretation::NeedsClarification { intent, .. } => intent,
            Interpretation::Resolved { intent, .. } => intent,
        }
    }

    pub fn needs_clarification(&self) -> bool {
        matches!(self, Interpretation::NeedsClarification { .. })
    }
}

/// Use case for a single interpretation round.
#[derive(Debug, Clone, Default)]
pub struct InterpretRequestUseCase {
    defaults: IntentDefaults,
}

impl InterpretRequestUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: IntentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Interpret `text` against `policy`. The policy is only read.
    pub fn execute(&self, text: &str, policy: &ClarificationPolicy) -> Interpretation {
        let intent = extract_intent(text);
        info!(
            "Extracted intent (confidence {:.2}) from {} chars",
            intent.confidence(),
            text.len()
        );
        debug!("Intent: {:?}", intent);

        if let Some(request) =
            get_next_clarification(&intent, policy).and_then(|decision| decision.clarification)
        {
            info!("Clarification needed: {}", request.clarification_type);
            return Interpretation::NeedsClarification { intent, request };
        }

        let defaults_applied = self.defaults.pending_for(&intent);
        let (resolved, _) = resolve_intent_with(&intent, policy, &self.defaults);
        let query = DeckQuery::from_intent(&resolved);
        info!(
            "Resolved intent with {} default(s), {} signal(s)",
            defaults_applied.len(),
            query.len()
        );

        Interpretation::Resolved {
            intent: resolved,
            query,
            defaults_applied,
        }
    }
}
