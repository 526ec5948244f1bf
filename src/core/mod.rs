//! Core engine types: players, dice, RNG, configuration.
//!
//! These are the building blocks the board and the turn engine share.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;

pub use player::{PlayerCount, PlayerId, PlayerMap};
pub use dice::{DiceSource, DieFace, ScriptedDice};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
