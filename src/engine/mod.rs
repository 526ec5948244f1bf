//! Turn-resolution engine.
//!
//! `GameSession` owns all logical game state and is the only thing that
//! mutates it. Presentation code calls `roll_dice`, then reads the returned
//! `DiceRollResult` and the session's accessors to draw the next frame.

pub mod phase;
pub mod roll;
pub mod session;

pub use phase::TurnPhase;
pub use roll::{DiceRollResult, MoveOutcome, RollRecord};
pub use session::GameSession;
