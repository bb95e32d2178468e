//! Behavioral contract every card scorer must honor.
//!
//! The contract is a test oracle: it holds no state and never ranks cards
//! itself. Three properties are checked:
//!
//! - **Dominance**: for a preference signal, a card matching it scores at
//!   least as high as a card that does not (ties are allowed)
//! - **Monotonicity**: adding any signal, matched or not, never lowers a
//!   card's score
//! - **Non-exclusivity**: a card failing only preference signals keeps a score
//!   of at least [`QueryContract::MIN_INCLUDED_SCORE`]

use super::deck_query::DeckQuery;
use super::signal::QuerySignal;
use crate::core::error::DomainError;
use serde::Serialize;

/// Scores a card against a query. Higher is better.
///
/// `card` is an opaque identifier (a card name in practice); the scorer owns
/// any card data it needs.
pub trait CardScorer {
    fn score(&self, card: &str, query: &DeckQuery) -> f64;

    fn matches_signal(&self, card: &str, signal: &QuerySignal) -> bool;
}

/// A single broken property found by [`QueryContract::certify`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "property", rename_all = "snake_case")]
pub enum ContractViolation {
    Dominance {
        signal: QuerySignal,
        matching_card: String,
        non_matching_card: String,
    },
    Monotonicity {
        card: String,
        signal: QuerySignal,
    },
    NonExclusivity {
        card: String,
        score: f64,
    },
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractViolation::Dominance {
                signal,
                matching_card,
                non_matching_card,
            } => write!(
                f,
                "dominance: '{}' scored below '{}' on {}",
                matching_card, non_matching_card, signal
            ),
            ContractViolation::Monotonicity { card, signal } => {
                write!(f, "monotonicity: adding {} lowered '{}'", signal, card)
            }
            ContractViolation::NonExclusivity { card, score } => write!(
                f,
                "non-exclusivity: '{}' scored {} below the inclusion floor",
                card, score
            ),
        }
    }
}

/// Result of certifying a scorer over a query and a card pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractReport {
    pub checks: usize,
    pub violations: Vec<ContractViolation>,
}

impl ContractReport {
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks for the scorer contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryContract;

impl QueryContract {
    /// Lowest score a card failing only preference signals may receive.
    pub const MIN_INCLUDED_SCORE: f64 = 0.0;

    /// True if `matching_card` scores at least as high as `non_matching_card`.
    ///
    /// Required signals are exempt and always pass. Fails with
    /// [`DomainError::ContractPrecondition`] if `matching_card` doesn't
    /// actually match `signal`.
    pub fn check_dominance<S: CardScorer + ?Sized>(
        &self,
        scorer: &S,
        query: &DeckQuery,
        matching_card: &str,
        non_matching_card: &str,
        signal: &QuerySignal,
    ) -> Result<bool, DomainError> {
        if signal.is_required() {
            return Ok(true);
        }

        if !scorer.matches_signal(matching_card, signal) {
            return Err(DomainError::ContractPrecondition {
                card: matching_card.to_string(),
                signal: signal.to_string(),
            });
        }

        let matching = scorer.score(matching_card, query);
        let non_matching = scorer.score(non_matching_card, query);
        Ok(matching >= non_matching)
    }

    /// True if adding `additional_signal` does not lower the card's score.
    ///
    /// Holds whether or not the card matches the added signal.
    pub fn check_monotonicity<S: CardScorer + ?Sized>(
        &self,
        scorer: &S,
        card: &str,
        base_query: &DeckQuery,
        additional_signal: &QuerySignal,
    ) -> bool {
        let base = scorer.score(card, base_query);
        let extended = scorer.score(card, &base_query.add_signal(additional_signal.clone()));
        extended >= base
    }

    /// True if the card keeps a score of at least
    /// [`MIN_INCLUDED_SCORE`](Self::MIN_INCLUDED_SCORE).
    ///
    /// Cards failing a required signal may legitimately be excluded, so the
    /// check passes for them without scoring.
    pub fn check_non_exclusivity<S: CardScorer + ?Sized>(
        &self,
        scorer: &S,
        query: &DeckQuery,
        non_matching_card: &str,
    ) -> bool {
        let fails_required = query
            .get_required()
            .any(|signal| !scorer.matches_signal(non_matching_card, signal));
        if fails_required {
            return true;
        }

        scorer.score(non_matching_card, query) >= Self::MIN_INCLUDED_SCORE
    }

    /// Run all three checks over every card in `cards`.
    ///
    /// - dominance for each preference signal and each (matching,
    ///   non-matching) pair that fails no required signal
    /// - monotonicity for each card while the query is rebuilt signal by signal
    /// - non-exclusivity for each card
    ///
    /// A precondition failure from the dominance check is returned as an
    /// error rather than counted as a violation.
    pub fn certify<S: CardScorer + ?Sized>(
        &self,
        scorer: &S,
        query: &DeckQuery,
        cards: &[&str],
    ) -> Result<ContractReport, DomainError> {
        let mut report = ContractReport::default();
        let legal: Vec<&str> = cards
            .iter()
            .copied()
            .filter(|card| query.get_required().all(|s| scorer.matches_signal(card, s)))
            .collect();

        for signal in query.get_preferences() {
            let (matching, non_matching): (Vec<&str>, Vec<&str>) = legal
                .iter()
                .copied()
                .partition(|card| scorer.matches_signal(card, signal));

            for m in &matching {
                for n in &non_matching {
                    report.checks += 1;
                    match self.check_dominance(scorer, query, m, n, signal) {
                        Ok(true) => {}
                        Ok(false) => report.violations.push(ContractViolation::Dominance {
                            signal: signal.clone(),
                            matching_card: m.to_string(),
                            non_matching_card: n.to_string(),
                        }),
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        for card in cards {
            let mut partial = DeckQuery::empty();
            for signal in query.signals() {
                report.checks += 1;
                if !self.check_monotonicity(scorer, card, &partial, signal) {
                    report.violations.push(ContractViolation::Monotonicity {
                        card: card.to_string(),
                        signal: signal.clone(),
                    });
                }
                partial = partial.add_signal(signal.clone());
            }

            report.checks += 1;
            if !self.check_non_exclusivity(scorer, query, card) {
                report.violations.push(ContractViolation::NonExclusivity {
                    card: card.to_string(),
                    score: scorer.score(card, query),
                });
            }
        }

        Ok(report)
    }
}
