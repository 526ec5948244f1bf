//! Turn state machine.
//!
//! ```text
//!              roll (no win)
//!          ┌──────────────────┐
//!          ▼                  │
//!   AwaitingRoll(p) ──► Resolving(p, from, to) ──► GameOver(p)
//!                         roll lands on 100
//! ```
//!
//! `Resolving` only exists inside a single `roll_dice` call. Callers see
//! `AwaitingRoll` or `GameOver` between calls.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Position};
use crate::core::PlayerId;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for `player` to roll.
    AwaitingRoll(PlayerId),
    /// A move is being committed, chasing transports from `to`.
    Resolving {
        player: PlayerId,
        from: Position,
        to: Cell,
    },
    /// `winner` reached cell 100. Only a reset leaves this state.
    GameOver(PlayerId),
}

impl TurnPhase {
    /// The player this phase concerns: the roller, or the winner.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        match self {
            TurnPhase::AwaitingRoll(player)
            | TurnPhase::Resolving { player, .. }
            | TurnPhase::GameOver(player) => player,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }

    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            TurnPhase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }
}

impl Default for TurnPhase {
    fn default() -> Self {
        TurnPhase::AwaitingRoll(PlayerId::FIRST)
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingRoll(player) => write!(f, "awaiting {player}'s roll"),
            TurnPhase::Resolving { player, from, to } => {
                write!(f, "resolving {player}'s move from {from} to cell {to}")
            }
            TurnPhase::GameOver(winner) => write!(f, "won by {winner}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(TurnPhase::default(), TurnPhase::AwaitingRoll(PlayerId::FIRST));
        assert!(!TurnPhase::default().is_over());
        assert_eq!(TurnPhase::default().winner(), None);
    }

    #[test]
    fn test_game_over_accessors() {
        let phase = TurnPhase::GameOver(PlayerId::new(3));
        assert!(phase.is_over());
        assert_eq!(phase.winner(), Some(PlayerId::new(3)));
        assert_eq!(phase.player(), PlayerId::new(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TurnPhase::AwaitingRoll(PlayerId::new(2)).to_string(),
            "awaiting Player 2's roll"
        );
        let resolving = TurnPhase::Resolving {
            player: PlayerId::new(1),
            from: Position::OffBoard,
            to: Cell::START,
        };
        assert_eq!(
            resolving.to_string(),
            "resolving Player 1's move from not started to cell 1"
        );
    }
}
