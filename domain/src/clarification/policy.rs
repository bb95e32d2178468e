//! Clarification policy: the per-request question budget.
//!
//! A [`ClarificationPolicy`] is created for exactly one request, threaded
//! through that request's dialog as an owned `&mut` handle, and dropped when
//! the request ends. It is never shared between requests, so no locking is
//! involved.

use super::entities::ClarificationType;
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Default maximum clarifications per request
pub const DEFAULT_MAX_CLARIFICATIONS: usize = 3;

/// Tracks the clarification budget for a single request.
///
/// Invariant: `asked.len() <= max_questions`. [`record`](Self::record) is the
/// only mutating operation and refuses anything that would break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationPolicy {
    max_questions: usize,
    asked: BTreeSet<ClarificationType>,
}

impl Default for ClarificationPolicy {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_CLARIFICATIONS,
            asked: BTreeSet::new(),
        }
    }
}

impl ClarificationPolicy {
    /// Fresh policy with a custom budget; `max_questions` must be positive.
    pub fn new(max_questions: usize) -> Result<Self, DomainError> {
        if max_questions == 0 {
            return Err(DomainError::InvalidBudget(max_questions));
        }
        Ok(Self {
            max_questions,
            asked: BTreeSet::new(),
        })
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// Types already asked, in priority order.
    pub fn asked(&self) -> impl Iterator<Item = ClarificationType> + '_ {
        self.asked.iter().copied()
    }

    pub fn asked_count(&self) -> usize {
        self.asked.len()
    }

    /// True if the budget allows more questions.
    pub fn can_ask(&self) -> bool {
        self.asked.len() < self.max_questions
    }

    /// Number of questions remaining.
    pub fn remaining(&self) -> usize {
        self.max_questions.saturating_sub(self.asked.len())
    }

    pub fn has_asked(&self, clarification_type: ClarificationType) -> bool {
        self.asked.contains(&clarification_type)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.can_ask()
    }

    /// Record that a clarification was asked.
    ///
    /// Fails with [`DomainError::BudgetExhausted`] when no slot is left, then
    /// with [`DomainError::DuplicateClarification`] when the type was already
    /// asked. Returns the policy for chaining.
    pub fn record(
        &mut self,
        clarification_type: ClarificationType,
    ) -> Result<&mut Self, DomainError> {
        if !self.can_ask() {
            return Err(DomainError::BudgetExhausted);
        }
        if self.has_asked(clarification_type) {
            return Err(DomainError::DuplicateClarification(clarification_type));
        }
        self.asked.insert(clarification_type);
        Ok(self)
    }
}
