//! Game session: positions, turn order, dice, and roll resolution.
//!
//! ## Turn rules
//!
//! - A token off the board needs a 6 to come on at cell 1. Any other face
//!   passes the turn.
//! - On the board, the token moves forward by the face. A roll that would
//!   pass cell 100 leaves the token where it is.
//! - After moving, snakes and ladders are followed until the token settles.
//! - Settling on cell 100 wins and ends the game.
//! - A raw 6 keeps the turn; anything else passes it to the next seat.
//!
//! Dice are the only source of nondeterminism. `apply_roll` is the pure
//! transition for a known face; `roll_dice` draws from the injected
//! `DiceSource` and delegates to it.

use im::Vector;
use tracing::{debug, info, warn};

use super::phase::TurnPhase;
use super::roll::{DiceRollResult, MoveOutcome, RollRecord};
use crate::board::{BoardTopology, Cell, Position, TransportPath};
use crate::core::{DiceSource, DieFace, GameRng, PlayerCount, PlayerId, PlayerMap};
use crate::error::GameError;

/// A running game for 2-4 players.
///
/// The session is cheap to clone: history is a persistent vector, so
/// snapshots for undo or inspection share structure.
#[derive(Clone, Debug)]
pub struct GameSession<D = GameRng> {
    player_count: PlayerCount,
    positions: PlayerMap<Position>,
    topology: BoardTopology,
    phase: TurnPhase,
    last_roll: Option<DieFace>,
    history: Vector<RollRecord>,
    dice: D,
}

impl GameSession<GameRng> {
    /// Standard board with dice seeded from `seed`.
    pub fn seeded(player_count: u8, seed: u64) -> Result<Self, GameError> {
        Self::new(player_count, GameRng::new(seed))
    }
}

impl<D: DiceSource> GameSession<D> {
    /// Start a game on the standard board.
    pub fn new(player_count: u8, dice: D) -> Result<Self, GameError> {
        Self::with_topology(player_count, BoardTopology::standard(), dice)
    }

    /// Start a game on a custom board.
    pub fn with_topology(
        player_count: u8,
        topology: BoardTopology,
        dice: D,
    ) -> Result<Self, GameError> {
        let count = PlayerCount::new(player_count).inspect_err(|_| {
            warn!(player_count, "rejected session with invalid player count");
        })?;
        info!(players = count.get(), "starting game session");
        Ok(Self {
            player_count: count,
            positions: PlayerMap::with_value(count, Position::OffBoard),
            topology,
            phase: TurnPhase::default(),
            last_roll: None,
            history: Vector::new(),
            dice,
        })
    }

    /// Replace every piece of game state with a fresh game for
    /// `player_count` players. The board and dice stream carry over.
    ///
    /// On an invalid count the session is left untouched.
    pub fn reset(&mut self, player_count: u8) -> Result<(), GameError> {
        let count = PlayerCount::new(player_count).inspect_err(|_| {
            warn!(player_count, "rejected reset with invalid player count");
        })?;
        info!(players = count.get(), "resetting game session");
        self.player_count = count;
        self.positions = PlayerMap::with_value(count, Position::OffBoard);
        self.phase = TurnPhase::default();
        self.last_roll = None;
        self.history = Vector::new();
        Ok(())
    }

    /// Roll the die for the current player and resolve the move.
    ///
    /// Fails with `InvalidStateTransition` once the game is over; the dice
    /// are not touched in that case.
    pub fn roll_dice(&mut self) -> Result<DiceRollResult, GameError> {
        self.ensure_awaiting_roll()?;
        let face = self.dice.roll();
        self.apply_roll(face)
    }

    /// Resolve a roll of `face` for the current player.
    pub fn apply_roll(&mut self, face: DieFace) -> Result<DiceRollResult, GameError> {
        let player = self.ensure_awaiting_roll()?;
        let from = self.positions[player];
        self.last_roll = Some(face);

        let (outcome, to, transports) = match self.target(from, face) {
            Target::NoEntry => (MoveOutcome::NoEntry, from, TransportPath::new()),
            Target::Overshoot => (MoveOutcome::Overshoot, from, TransportPath::new()),
            Target::Cell(target) => {
                self.phase = TurnPhase::Resolving {
                    player,
                    from,
                    to: target,
                };
                let landing = self.topology.resolve_chain(target);
                for transport in &landing.path {
                    debug!(%player, %transport, "took transport");
                }
                let outcome = if landing.cell == Cell::GOAL {
                    MoveOutcome::Won
                } else if from.is_off_board() {
                    MoveOutcome::Entered
                } else {
                    MoveOutcome::Moved
                };
                (outcome, Position::from(landing.cell), landing.path)
            }
        };

        self.positions[player] = to;

        let extra_turn = outcome != MoveOutcome::Won && face.is_six();
        self.phase = if outcome == MoveOutcome::Won {
            info!(%player, "player reached cell 100");
            TurnPhase::GameOver(player)
        } else if extra_turn {
            TurnPhase::AwaitingRoll(player)
        } else {
            TurnPhase::AwaitingRoll(player.next(self.player_count))
        };

        let result = DiceRollResult {
            player,
            face,
            from,
            to,
            outcome,
            transports,
            extra_turn,
            next: self.phase,
        };
        debug!(
            %player,
            face = face.get(),
            from = from.number(),
            to = to.number(),
            ?outcome,
            "resolved roll"
        );

        self.history.push_back(RollRecord {
            sequence: self.turn_number() + 1,
            result: result.clone(),
        });
        Ok(result)
    }

    fn ensure_awaiting_roll(&self) -> Result<PlayerId, GameError> {
        match self.phase {
            TurnPhase::AwaitingRoll(player) => Ok(player),
            phase => {
                warn!(%phase, "rejected roll");
                Err(GameError::InvalidStateTransition { phase })
            }
        }
    }

    fn target(&self, from: Position, face: DieFace) -> Target {
        match from {
            Position::OffBoard if face.is_six() => Target::Cell(Cell::START),
            Position::OffBoard => Target::NoEntry,
            Position::OnBoard(cell) => cell
                .advance(face.get())
                .map_or(Target::Overshoot, Target::Cell),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whose turn it is, or the winner once the game is over.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.phase.player()
    }

    /// A player's position, or `None` for a seat not in this game.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<Position> {
        self.positions.get(player).copied()
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Position> {
        &self.positions
    }

    /// The most recent face rolled, `None` before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<DieFace> {
        self.last_roll
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.phase.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// Every resolved roll since the game started.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// Rolls resolved since the game started or was last reset.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.history.len() as u32
    }

    /// Players ordered from furthest along to furthest behind; ties keep
    /// seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, Position)> {
        let mut standings: Vec<_> = self.positions.iter().map(|(p, &pos)| (p, pos)).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        standings
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }
}

enum Target {
    NoEntry,
    Overshoot,
    Cell(Cell),
}
