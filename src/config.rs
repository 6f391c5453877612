//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hotseat.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name-field prefills.
    players: PlayersConfig,

    /// Log filter and destination.
    logging: LoggingConfig,
}

/// Text prefilled into the name-entry fields.
///
/// Blank values stay blank; default names are applied when the game starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Prefill for the first player (X).
    player1: String,

    /// Prefill for the second player (O).
    player2: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,

    /// Log file written while the terminal UI owns the screen.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: PathBuf::from("hotseat_tictactoe.log"),
        }
    }
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging().filter(), "info");
        assert!(config.players().player1().is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [players]
            player1 = "Alice"

            [logging]
            filter = "debug"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.players().player1(), "Alice");
        assert_eq!(config.players().player2(), "");
        assert_eq!(config.logging().filter(), "debug");
        assert_eq!(config.logging().file(), &PathBuf::from("hotseat_tictactoe.log"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = AppConfig::from_toml("[players\nplayer1 = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }
}
