//! Domain error types

use crate::clarification::ClarificationType;
use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a caller or test bug rather than a transient condition,
/// so none of them are retried or recovered inside the domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Clarification budget exhausted")]
    BudgetExhausted,

    #[error("Already asked {0}")]
    DuplicateClarification(ClarificationType),

    #[error("confidence must be in [0.0, 1.0], got {0}")]
    InvalidConfidence(f64),

    #[error("Card '{card}' does not match signal {signal}")]
    ContractPrecondition { card: String, signal: String },

    #[error("max_questions must be positive, got {0}")]
    InvalidBudget(usize),
}

impl DomainError {
    /// Check if this error comes from the clarification budget
    pub fn is_budget_error(&self) -> bool {
        matches!(
            self,
            DomainError::BudgetExhausted | DomainError::DuplicateClarification(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_display() {
        let error = DomainError::DuplicateClarification(ClarificationType::Format);
        assert_eq!(error.to_string(), "Already asked format");
    }

    #[test]
    fn test_precondition_error_mentions_signal() {
        let error = DomainError::ContractPrecondition {
            card: "Lightning Bolt".to_string(),
            signal: "tribe=Goblin (strong)".to_string(),
        };
        assert!(error.to_string().contains("does not match signal"));
        assert!(error.to_string().contains("Lightning Bolt"));
    }

    #[test]
    fn test_is_budget_error_check() {
        assert!(DomainError::BudgetExhausted.is_budget_error());
        assert!(DomainError::DuplicateClarification(ClarificationType::Colors).is_budget_error());
        assert!(!DomainError::InvalidConfidence(1.5).is_budget_error());
        assert!(!DomainError::InvalidBudget(0).is_budget_error());
    }
}
