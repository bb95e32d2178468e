//! Clarification port for asking the user follow-up questions.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ClarificationPort`] - defined here in application layer
//! - **Adapter**: `InteractiveClarification` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! get_next_clarification(intent, policy) ── Some(request)
//!        ↓
//! ClarificationPort::ask(intent, request)
//!        ↓
//! Some(answer) → merged into the intent
//! None         → declined; the question still counts against the budget
//! ```
//!
//! # Built-in Implementations
//!
//! - [`SkipClarification`] - Declines every question
//! - [`ScriptedClarification`] - Replays a fixed list of answers

use async_trait::async_trait;
use deckwright_domain::{ClarificationRequest, DeckIntent};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Error type for clarification operations.
///
/// These errors represent failures while asking, not answers given by the
/// user. Declining a question is `Ok(None)`, not an error.
#[derive(Debug, Clone)]
pub enum ClarificationPortError {
    /// User cancelled the dialog (e.g., via Ctrl+D).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
    /// Invalid user input (e.g., option number out of range).
    InvalidInput(String),
}

impl std::fmt::Display for ClarificationPortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClarificationPortError::Cancelled => write!(f, "Clarification cancelled"),
            ClarificationPortError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ClarificationPortError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ClarificationPortError {}

/// Port for asking the user one clarification question.
///
/// # Implementations
///
/// - **Interactive (CLI)**: `InteractiveClarification` in presentation layer
/// - **Non-interactive**: [`SkipClarification`]
/// - **Scripted**: [`ScriptedClarification`]
#[async_trait]
pub trait ClarificationPort: Send + Sync {
    /// Ask the question described by `request`.
    ///
    /// `intent` is what is known so far, for display.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(answer))` - Free-form answer text
    /// * `Ok(None)` - The user declined to answer
    /// * `Err(ClarificationPortError)` - Error while asking
    async fn ask(
        &self,
        intent: &DeckIntent,
        request: &ClarificationRequest,
    ) -> Result<Option<String>, ClarificationPortError>;
}

/// Declines every question, so unresolved fields fall back to defaults.
pub struct SkipClarification;

#[async_trait]
impl ClarificationPort for SkipClarification {
    async fn ask(
        &self,
        _intent: &DeckIntent,
        _request: &ClarificationRequest,
    ) -> Result<Option<String>, ClarificationPortError> {
        Ok(None)
    }
}

/// Replays pre-recorded answers in order, then declines.
pub struct ScriptedClarification {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedClarification {
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of answers not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.answers.lock().await.len()
    }
}

#[async_trait]
impl ClarificationPort for ScriptedClarification {
    async fn ask(
        &self,
        _intent: &DeckIntent,
        _request: &ClarificationRequest,
    ) -> Result<Option<String>, ClarificationPortError> {
        Ok(self.answers.lock().await.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckwright_domain::ClarificationType;

    fn format_request() -> ClarificationRequest {
        ClarificationRequest::for_type(ClarificationType::Format)
    }

    #[tokio::test]
    async fn test_skip_declines() {
        let answer = SkipClarification
            .ask(&DeckIntent::empty(), &format_request())
            .await
            .unwrap();
        assert!(answer.is_none());
    }

    #[tokio::test]
    async fn test_scripted_replays_in_order_then_declines() {
        let port = ScriptedClarification::new(["modern", "red"]);
        let intent = DeckIntent::empty();

        assert_eq!(
            port.ask(&intent, &format_request()).await.unwrap().as_deref(),
            Some("modern")
        );
        assert_eq!(port.remaining().await, 1);
        assert_eq!(
            port.ask(&intent, &format_request()).await.unwrap().as_deref(),
            Some("red")
        );
        assert!(port.ask(&intent, &format_request()).await.unwrap().is_none());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClarificationPortError::InvalidInput("7".to_string()).to_string(),
            "Invalid input: 7"
        );
        assert_eq!(
            ClarificationPortError::Cancelled.to_string(),
            "Clarification cancelled"
        );
    }
}
