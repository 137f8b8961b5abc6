//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_omok::Player;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "omok.toml";

/// Settings for the console front-end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct OmokConfig {
    /// Display name for the black player.
    black_name: String,

    /// Display name for the white player.
    white_name: String,

    /// Directory exports are written to.
    export_dir: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for OmokConfig {
    fn default() -> Self {
        Self {
            black_name: Player::Black.name().to_string(),
            white_name: Player::White.name().to_string(),
            export_dir: PathBuf::from("."),
            log_filter: "info".to_string(),
        }
    }
}

impl OmokConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(black = %config.black_name, white = %config.white_name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Display name configured for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Black => &self.black_name,
            Player::White => &self.white_name,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.black_name.trim().is_empty() || self.white_name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.black_name == self.white_name {
            return Err(ConfigError::new(format!(
                "Player names must differ (both are {:?})",
                self.black_name
            )));
        }
        Ok(())
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
