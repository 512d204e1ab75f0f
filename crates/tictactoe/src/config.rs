//! Game configuration loaded from an optional TOML file.
//!
//! ```toml
//! default_size = 4
//!
//! [player_one]
//! name = "Alice"
//! symbol = "A"
//!
//! [player_two]
//! name = "Bob"
//! symbol = "B"
//! ```

use crate::render::EMPTY_CELL;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Players};
use tracing::{debug, info, instrument};

/// Name and board symbol for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name used in prompts and results.
    name: String,
    /// Single character drawn on the board.
    symbol: char,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size used when the size prompt is left blank.
    #[serde(default = "default_size")]
    default_size: usize,

    /// Seat one (moves first).
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Seat two.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_player_one() -> PlayerConfig {
    PlayerConfig::new("User 1", 'O')
}

fn default_player_two() -> PlayerConfig {
    PlayerConfig::new("User 2", 'X')
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(default_size = config.default_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds the player roster.
    pub fn players(&self) -> Players {
        Players::new(
            &self.player_one.name,
            self.player_one.symbol,
            &self.player_two.name,
            self.player_two.symbol,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.default_size) {
            return Err(ConfigError::new(format!(
                "default_size must be between {} and {}, got {}",
                MIN_SIZE, MAX_SIZE, self.default_size
            )));
        }
        let one = self.player_one.symbol;
        let two = self.player_two.symbol;
        if one == two {
            return Err(ConfigError::new(format!(
                "Players need different symbols, both use '{}'",
                one
            )));
        }
        if one == EMPTY_CELL || two == EMPTY_CELL || one.is_whitespace() || two.is_whitespace() {
            return Err(ConfigError::new(format!(
                "Player symbols cannot be blank or '{}'",
                EMPTY_CELL
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
