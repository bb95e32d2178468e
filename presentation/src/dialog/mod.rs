//! Terminal dialog adapters

pub mod interactive;

pub use interactive::{InteractiveClarification, question_text, resolve_answer};
