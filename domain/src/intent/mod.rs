//! Deck intent domain
//!
//! Turns free-form request text into a partially populated [`DeckIntent`].
//!
//! ```text
//! text ──► patterns ──► extract_intent ──► DeckIntent { .., confidence }
//!                                              │
//!                               apply_intent_defaults (when not asking)
//! ```

pub mod confidence;
pub mod defaults;
pub mod entities;
pub mod extraction;
pub mod patterns;
pub mod value_objects;

pub use confidence::calculate_confidence;
pub use defaults::{AppliedDefault, IntentDefaults, apply_intent_defaults, apply_intent_defaults_with};
pub use entities::DeckIntent;
pub use extraction::{
    extract_archetype, extract_colors, extract_constraints, extract_format, extract_intent,
    extract_theme, extract_tribe,
};
pub use value_objects::{Archetype, Color, Constraint, Format};
