//! What a single roll did.
//!
//! A `DiceRollResult` is the event a presentation layer animates: where the
//! token started, every snake or ladder it rode, where it settled, and who
//! moves next. The engine has already committed the move by the time the
//! result is returned.

use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;
use crate::board::{Position, TransportKind, TransportPath};
use crate::core::{DieFace, PlayerId};

/// How a roll played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Off the board and not a six: the token stays put.
    NoEntry,
    /// A six brought the token onto cell 1 (and whatever it leads to).
    Entered,
    /// An ordinary move along the board.
    Moved,
    /// The roll would pass cell 100, so the token stays put.
    Overshoot,
    /// The token settled on cell 100.
    Won,
}

impl MoveOutcome {
    /// Whether the token changed cells before transports.
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, MoveOutcome::Entered | MoveOutcome::Moved | MoveOutcome::Won)
    }
}

/// Result of one resolved roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollResult {
    /// Who rolled.
    pub player: PlayerId,
    /// The raw face, before any snake or ladder.
    pub face: DieFace,
    /// Position before the roll.
    pub from: Position,
    /// Position after every transport has been followed.
    pub to: Position,
    pub outcome: MoveOutcome,
    /// Snakes and ladders ridden, in order.
    pub transports: TransportPath,
    /// The roller keeps the turn (rolled a six and did not win).
    pub extra_turn: bool,
    /// Phase after this roll.
    pub next: TurnPhase,
}

impl DiceRollResult {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Won)
    }

    /// Whether any snake or ladder was ridden.
    #[must_use]
    pub fn used_transport(&self) -> bool {
        !self.transports.is_empty()
    }

    /// Number of snakes ridden on this roll.
    #[must_use]
    pub fn snakes_taken(&self) -> usize {
        self.count(TransportKind::Snake)
    }

    /// Number of ladders climbed on this roll.
    #[must_use]
    pub fn ladders_taken(&self) -> usize {
        self.count(TransportKind::Ladder)
    }

    fn count(&self, kind: TransportKind) -> usize {
        self.transports.iter().filter(|t| t.kind == kind).count()
    }
}

impl std::fmt::Display for DiceRollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolled {}: ", self.player, self.face)?;
        match self.outcome {
            MoveOutcome::NoEntry => write!(f, "needs a 6 to start")?,
            MoveOutcome::Overshoot => write!(f, "too far, stays on {}", self.from)?,
            _ => write!(f, "{} -> {}", self.from, self.to)?,
        }
        for transport in &self.transports {
            write!(f, " ({transport})")?;
        }
        if self.extra_turn {
            write!(f, ", rolls again")?;
        }
        Ok(())
    }
}

/// One entry in the session's roll history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// 1-based count of rolls in this game.
    pub sequence: u32,
    pub result: DiceRollResult,
}
