//! # snakes-and-ladders
//!
//! A deterministic Snake-and-Ladder rules engine for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Logic only**: The engine holds positions, turn order and win state.
//!    Drawing, animation and input belong to whoever drives it.
//!
//! 2. **Injectable dice**: Every roll comes from a `DiceSource`. Seeded
//!    `GameRng` for play, `ScriptedDice` for tests and replays.
//!
//! 3. **Validate at the edges**: Player counts, die faces, cells and custom
//!    layouts are checked when constructed, so turn resolution never has to.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration
//! - `board`: Cells, zigzag grid coordinates, snake/ladder topology
//! - `engine`: Game session, turn state machine, roll results
//! - `cli`: Terminal front end
//! - `error`: Structured error types
//!
//! ## Example
//!
//! ```
//! use snakes_and_ladders::{GameSession, MoveOutcome, ScriptedDice};
//!
//! let dice = ScriptedDice::new([6, 3]).unwrap();
//! let mut session = GameSession::new(2, dice).unwrap();
//!
//! // A six brings player 1 onto cell 1, which is a ladder to 38.
//! let roll = session.roll_dice().unwrap();
//! assert_eq!(roll.outcome, MoveOutcome::Entered);
//! assert_eq!(roll.to.number(), 38);
//! assert!(roll.extra_turn);
//!
//! let roll = session.roll_dice().unwrap();
//! assert_eq!(roll.to.number(), 41);
//! assert_eq!(session.current_player().number(), 2);
//! ```

pub mod core;
pub mod board;
pub mod engine;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, DieFace, GameConfig, GameRng, GameRngState, PlayerCount, PlayerId, PlayerMap,
    ScriptedDice,
};

pub use crate::board::{
    cell_to_coordinate, BoardTopology, Cell, GridCoord, Position, Transport, TransportKind,
};

pub use crate::engine::{DiceRollResult, GameSession, MoveOutcome, RollRecord, TurnPhase};

pub use crate::error::{ConfigError, GameError, TopologyError};
