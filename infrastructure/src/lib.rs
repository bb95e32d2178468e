//! Infrastructure layer for deckwright
//!
//! This crate contains the adapters that touch the outside world: today,
//! configuration file discovery, merging and validation.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileClarificationConfig, FileConfig, FileDefaultsConfig,
    FileOutputConfig, FileOutputFormat,
};
