//! Deck query model and the scorer contract.
//!
//! A [`DeckQuery`] expresses what the user wants as signals with strengths.
//! Scorers consume it; [`QueryContract`] checks that they do so without
//! turning preferences into filters.

pub mod contract;
pub mod deck_query;
pub mod signal;

pub use contract::{CardScorer, ContractReport, ContractViolation, QueryContract};
pub use deck_query::{
    DeckQuery, QueryOptions, is_archetype_query, is_theme_query, is_tribal_query,
};
pub use signal::{QuerySignal, QuerySignalType, SignalStrength};
