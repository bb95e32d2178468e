//! Clarification domain
//!
//! Decides, on a strict per-request budget, whether to ask the user a
//! follow-up question or proceed with defaults.
//!
//! # Flow
//!
//! ```text
//! DeckIntent ──► get_next_clarification(intent, policy)
//!                   │
//!        Some(decision)            None
//!                   │                 │
//!     caller asks, then         apply defaults
//!     policy.record(type)       (resolve_intent)
//! ```
//!
//! # Invariants
//!
//! - At most `max_questions` clarifications per request (default 3)
//! - No clarification type is asked twice
//! - Budget exhausted → always proceed with defaults

pub mod decision;
pub mod entities;
pub mod policy;
pub mod resolver;

pub use decision::{
    evaluate_clarification, get_next_clarification, intent_needs_clarification,
    should_ask_clarification,
};
pub use entities::{ClarificationDecision, ClarificationRequest, ClarificationType};
pub use policy::{ClarificationPolicy, DEFAULT_MAX_CLARIFICATIONS};
pub use resolver::{resolve_intent, resolve_intent_with};
