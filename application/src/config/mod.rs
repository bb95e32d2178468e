//! Application-level configuration.
//!
//! - [`DialogConfig`]: clarification budget and defaults for one request

pub mod dialog_config;

pub use dialog_config::DialogConfig;
