//! Service configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays the side not chosen by the creating player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Opponent {
    /// A second human submits the other side's moves.
    #[default]
    Human,
    /// The service answers every move with a minimax reply.
    Computer,
}

/// How the computer chooses its first move on an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Opening {
    /// Any empty cell, uniformly at random.
    #[default]
    Random,
    /// Same search as every other move.
    Minimax,
}

/// Configuration for the game service.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Opponent for the side the player did not choose.
    #[serde(default)]
    opponent: Opponent,

    /// Computer opening when it moves first.
    #[serde(default)]
    computer_opening: Opening,

    /// Drop finished games from the store.
    #[serde(default = "default_evict_finished")]
    evict_finished: bool,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_evict_finished() -> bool {
    true
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            computer_opening: Opening::default(),
            evict_finished: default_evict_finished(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServiceConfig {
    /// Configuration for two human players.
    pub fn two_player() -> Self {
        Self::default()
    }

    /// Configuration where the service plays the opposite side.
    pub fn against_computer(computer_opening: Opening) -> Self {
        Self {
            opponent: Opponent::Computer,
            computer_opening,
            ..Self::default()
        }
    }

    /// Returns a copy with `evict_finished` set.
    pub fn with_evict_finished(mut self, evict_finished: bool) -> Self {
        self.evict_finished = evict_finished;
        self
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            opponent = %config.opponent,
            computer_opening = %config.computer_opening,
            evict_finished = config.evict_finished,
            "Config loaded successfully"
        );
        Ok(config)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
