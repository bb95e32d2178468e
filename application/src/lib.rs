//! Application layer for deckwright
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DialogConfig;
pub use ports::clarification_port::{
    ClarificationPort, ClarificationPortError, ScriptedClarification, SkipClarification,
};
pub use use_cases::interpret_request::{Interpretation, InterpretRequestUseCase};
pub use use_cases::run_dialog::{
    DialogOutcome, RunDialogError, RunDialogInput, RunDialogUseCase, answer_intent,
};
