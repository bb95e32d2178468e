//! Dialog parameters: per-request clarification budget and defaults.

use deckwright_domain::{
    ClarificationPolicy, DEFAULT_MAX_CLARIFICATIONS, DomainError, IntentDefaults,
};

/// Controls how a single request's dialog behaves.
///
/// A fresh [`ClarificationPolicy`] is built from this for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    /// Maximum clarification questions per request.
    pub max_questions: usize,
    /// Values used for fields the dialog leaves open.
    pub defaults: IntentDefaults,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_CLARIFICATIONS,
            defaults: IntentDefaults::default(),
        }
    }
}

impl DialogConfig {
    // ==================== Builder Methods ====================

    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_defaults(mut self, defaults: IntentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// A fresh policy for one request.
    pub fn policy(&self) -> Result<ClarificationPolicy, DomainError> {
        ClarificationPolicy::new(self.max_questions)
    }
}
