//! Structured error types.
//!
//! Every fallible engine operation returns one of these to its immediate
//! caller. Invalid calls are caller bugs, not transient failures, so nothing
//! here is retried by the engine.

use std::path::PathBuf;

use crate::engine::TurnPhase;

/// Errors raised by session construction and turn resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(u8),

    #[error("cannot roll while the game is {phase}")]
    InvalidStateTransition { phase: TurnPhase },

    #[error("die face must be between 1 and 6, got {0}")]
    InvalidDieFace(u8),

    #[error("scripted dice need at least one face")]
    EmptyDiceScript,

    #[error("invalid board topology: {0}")]
    Topology(#[from] TopologyError),
}

/// Violations detected while building a custom snake/ladder layout.
///
/// These are always raised eagerly by `BoardTopology::new`, never during play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("cell {0} is outside the board (1-100)")]
    CellOutOfRange(u8),

    #[error("snake {head}->{tail} must go down the board")]
    SnakeNotDescending { head: u8, tail: u8 },

    #[error("ladder {bottom}->{top} must go up the board")]
    LadderNotAscending { bottom: u8, top: u8 },

    #[error("cell {0} is both a snake head and a ladder bottom")]
    HeadBottomCollision(u8),

    #[error("cell {0} starts more than one transport")]
    DuplicateStart(u8),

    #[error("transport chain starting at cell {start} never settles")]
    Cycle { start: u8 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
