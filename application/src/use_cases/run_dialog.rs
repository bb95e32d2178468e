//! Run Dialog use case.
//!
//! Drives the full ask-vs-assume loop for one request:
//!
//! 1. Extract an intent from the request text
//! 2. While the decision engine has a question, ask it through the
//!    [`ClarificationPort`], record it on the policy, and merge the answer
//! 3. Resolve the remaining gaps with defaults and build the [`DeckQuery`]
//!
//! The policy lives for exactly one `execute` call.

use crate::config::DialogConfig;
use crate::ports::clarification_port::{ClarificationPort, ClarificationPortError};
use deckwright_domain::{
    AppliedDefault, ClarificationType, DeckIntent, DeckQuery, DomainError, extract_intent,
    get_next_clarification, resolve_intent_with,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a dialog.
#[derive(Error, Debug)]
pub enum RunDialogError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Clarification failed: {0}")]
    Clarification(#[from] ClarificationPortError),
}

/// Input for the [`RunDialogUseCase`].
#[derive(Debug, Clone)]
pub struct RunDialogInput {
    /// The user's deck request.
    pub request: String,
    /// Budget and defaults for this request.
    pub config: DialogConfig,
}

impl RunDialogInput {
    pub fn new(request: impl Into<String>, config: DialogConfig) -> Self {
        Self {
            request: request.into(),
            config,
        }
    }
}

/// Final state of a dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogOutcome {
    /// Confidence of the intent extracted from the request alone.
    pub initial_confidence: f64,
    /// The resolved intent after answers and defaults.
    pub intent: DeckIntent,
    pub query: DeckQuery,
    /// Questions asked, in order.
    pub asked: Vec<ClarificationType>,
    /// Defaults filled in after the dialog, in field order.
    pub defaults_applied: Vec<AppliedDefault>,
}

/// Use case for running a clarification dialog.
pub struct RunDialogUseCase {
    port: Arc<dyn ClarificationPort>,
}

impl Clone for RunDialogUseCase {
    fn clone(&self) -> Self {
        Self {
            port: self.port.clone(),
        }
    }
}

impl RunDialogUseCase {
    pub fn new(port: Arc<dyn ClarificationPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self, input: RunDialogInput) -> Result<DialogOutcome, RunDialogError> {
        let mut policy = input.config.policy()?;
        let mut intent = extract_intent(&input.request);
        let initial_confidence = intent.confidence();
        info!(
            "Starting dialog (confidence {:.2}, budget {})",
            initial_confidence,
            policy.max_questions()
        );

        let mut asked = Vec::new();
        while let Some(request) =
            get_next_clarification(&intent, &policy).and_then(|decision| decision.clarification)
        {
            let clarification_type = request.clarification_type;
            debug!("Asking {}", request.question_key);

            let answer = self.port.ask(&intent, &request).await?;
            policy.record(clarification_type)?;
            asked.push(clarification_type);

            match answer {
                Some(text) => {
                    let answered = answer_intent(clarification_type, &text);
                    intent = intent.merged_with(&answered);
                    debug!(
                        "Merged answer for {} (confidence {:.2})",
                        clarification_type,
                        intent.confidence()
                    );
                }
                None => debug!("{} declined", clarification_type),
            }
        }

        if policy.is_exhausted() {
            debug!("Clarification budget exhausted after {} question(s)", asked.len());
        }

        let defaults_applied = input.config.defaults.pending_for(&intent);
        let (resolved, needs_clarification) =
            resolve_intent_with(&intent, &policy, &input.config.defaults);
        if needs_clarification {
            // Only reachable if the decision engine and resolver disagree.
            warn!("Resolver still wants a clarification; proceeding without it");
        }

        let query = DeckQuery::from_intent(&resolved);
        info!(
            "Dialog finished: {} question(s), {} default(s), {} signal(s)",
            asked.len(),
            defaults_applied.len(),
            query.len()
        );

        Ok(DialogOutcome {
            initial_confidence,
            intent: resolved,
            query,
            asked,
            defaults_applied,
        })
    }
}

/// Interpret an answer to a `clarification_type` question.
///
/// Answers go through the same extractor as requests. A free-form
/// tribe-or-theme answer the pattern tables don't recognize is kept as the
/// theme verbatim.
pub fn answer_intent(clarification_type: ClarificationType, answer: &str) -> DeckIntent {
    let answered = extract_intent(answer);
    let trimmed = answer.trim();

    if clarification_type == ClarificationType::TribeOrTheme
        && !answered.has_tribe_or_theme()
        && !trimmed.is_empty()
    {
        return answered.with_theme(trimmed.to_lowercase());
    }
    answered
}
