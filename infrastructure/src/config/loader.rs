//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_CONFIG_FILES: [&str; 2] = ["deckwright.toml", ".deckwright.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./deckwright.toml` or `./.deckwright.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/deckwright/config.toml`
    /// 4. Fallback: `~/.config/deckwright/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigValidationError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigValidationError::Invalid(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
            .extract()
            .map_err(|e| ConfigValidationError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/deckwright/config.toml if set,
    /// otherwise falls back to ~/.config/deckwright/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("deckwright").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./deckwright.toml or ./.deckwright.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckwright_domain::{Archetype, Format, OutputFormat};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.clarification.max_questions, 3);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("deckwright"));
    }

    #[test]
    fn test_load_explicit_path_overrides_defaults() {
        let file = write_config(
            r#"
[clarification]
max_questions = 1

[defaults]
format = "modern"
archetype = "tempo"

[output]
format = "json"
"#,
        );

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.clarification.max_questions, 1);
        assert_eq!(config.defaults.parse_format().0, Format::Modern);
        assert_eq!(config.defaults.parse_archetype().0, Archetype::Tempo);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        // Unset keys keep their defaults
        assert!(config.output.color);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let file = write_config("[clarification\nmax_questions = ");
        let err = ConfigLoader::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigValidationError::Load(_)));
    }

    #[test]
    fn test_load_wrong_type_is_error() {
        let file = write_config("[clarification]\nmax_questions = \"three\"\n");
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
