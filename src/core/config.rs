//! Session configuration.
//!
//! A `GameConfig` can come from defaults, a TOML file, or builder calls, and
//! the CLI layers its flags on top of whichever it started with.
//!
//! ```toml
//! player_count = 3
//! seed = 1234
//! auto_roll = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::player::PlayerCount;
use super::rng::GameRng;
use crate::error::ConfigError;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-4). Kept as a raw number so a bad file reports
    /// a validation error rather than a parse error.
    pub player_count: u8,

    /// Seed for the dice stream. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Roll automatically instead of waiting for the player to press Enter.
    pub auto_roll: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: PlayerCount::MIN,
            seed: None,
            auto_roll: false,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.players().map(|_| ())
    }

    /// The validated player count.
    pub fn players(&self) -> Result<PlayerCount, ConfigError> {
        PlayerCount::new(self.player_count).map_err(|_| {
            ConfigError::Validation(format!(
                "player_count must be in {}..={}, got {}",
                PlayerCount::MIN,
                PlayerCount::MAX,
                self.player_count
            ))
        })
    }

    /// Build the dice stream this config asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Set the player count.
    #[must_use]
    pub fn with_player_count(mut self, count: u8) -> Self {
        self.player_count = count;
        self
    }

    /// Set a fixed dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable automatic rolling.
    #[must_use]
    pub fn with_auto_roll(mut self, auto_roll: bool) -> Self {
        self.auto_roll = auto_roll;
        self
    }
}
