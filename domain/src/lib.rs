//! Domain layer for deckwright
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns, and
//! nothing in it performs I/O.
//!
//! # Core Concepts
//!
//! ## Intent
//!
//! Free-form deck requests ("standard gruul midrange dinosaurs") are turned
//! into a partially populated [`DeckIntent`] by deterministic pattern
//! matching, with a confidence score derived from what was found.
//!
//! ## Clarification
//!
//! A per-request [`ClarificationPolicy`] caps follow-up questions. The
//! decision engine picks the next question in priority order, or none, in
//! which case the resolver fills gaps with defaults.
//!
//! ## Query
//!
//! A resolved intent becomes a [`DeckQuery`]: ordered signals with strengths.
//! Preferences only bias scores; [`QueryContract`] certifies that a
//! [`CardScorer`] respects that.

pub mod clarification;
pub mod config;
pub mod core;
pub mod intent;
pub mod query;

// Re-export commonly used types
pub use clarification::{
    ClarificationDecision, ClarificationPolicy, ClarificationRequest, ClarificationType,
    DEFAULT_MAX_CLARIFICATIONS, evaluate_clarification, get_next_clarification,
    intent_needs_clarification, resolve_intent, resolve_intent_with, should_ask_clarification,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use intent::{
    AppliedDefault, Archetype, Color, Constraint, DeckIntent, Format, IntentDefaults,
    apply_intent_defaults, apply_intent_defaults_with, calculate_confidence, extract_intent,
};
pub use query::{
    CardScorer, ContractReport, ContractViolation, DeckQuery, QueryContract, QueryOptions,
    QuerySignal, QuerySignalType, SignalStrength, is_archetype_query, is_theme_query,
    is_tribal_query,
};
