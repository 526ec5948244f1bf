//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use super::CliError;
use crate::core::GameConfig;

/// Snake and Ladder for 2-4 players in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "snakes-and-ladders")]
#[command(about = "Snake and Ladder for 2-4 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of players (2-4)
    #[arg(short, long)]
    pub players: Option<u8>,

    /// Seed for the dice, for a repeatable game
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Roll automatically until someone wins
    #[arg(long)]
    pub auto: bool,

    /// Print only roll results, not the board
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides and
    /// validate the result.
    pub fn resolve_config(&self) -> Result<GameConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(players) = self.players {
            config = config.with_player_count(players);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.auto {
            config = config.with_auto_roll(true);
        }
        config.validate()?;
        Ok(config)
    }
}
