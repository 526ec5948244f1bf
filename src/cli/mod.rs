//! Terminal front end.
//!
//! - `args`: flag parsing and config merging
//! - `render`: text board, legend and player panel
//! - `play`: the prompt-and-roll loop

pub mod args;
pub mod play;
pub mod render;

pub use args::Cli;
pub use play::{PlayOptions, PlayOutcome};

use std::io;

use tracing::info;

use crate::engine::GameSession;
use crate::error::{ConfigError, GameError};

/// Anything that can stop the front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Build a session from parsed arguments and play it on stdin/stdout.
pub fn run(cli: &Cli) -> Result<PlayOutcome, CliError> {
    let config = cli.resolve_config()?;
    let players = config.players()?;
    let dice = config.rng();
    info!(players = players.get(), seed = dice.seed(), "new game");

    let mut session = GameSession::new(players.get(), dice)?;
    let options = PlayOptions {
        auto_roll: config.auto_roll,
        quiet: cli.quiet,
    };
    play::run(&mut session, options, io::stdin().lock(), io::stdout().lock())
}
