//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod interpret_request;
pub mod run_dialog;
