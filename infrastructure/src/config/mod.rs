//! Configuration file loading for deckwright
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./deckwright.toml` or `./.deckwright.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/deckwright/config.toml`
//! 4. Fallback: `~/.config/deckwright/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClarificationConfig, FileConfig, FileDefaultsConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
