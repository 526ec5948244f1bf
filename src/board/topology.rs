//! Snake and ladder layout.
//!
//! A `BoardTopology` is a pair of lookup tables: snake heads to tails and
//! ladder bottoms to tops. Layouts are validated once, when built, so the
//! turn engine can chase transport chains without any runtime checks:
//!
//! - every cell is on the board,
//! - snakes go down, ladders go up,
//! - no cell starts more than one transport,
//! - following transports from any cell always settles.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use crate::error::TopologyError;

/// Snakes on the standard board, head to tail.
pub const DEFAULT_SNAKES: [(u8, u8); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 36),
    (93, 73),
    (95, 75),
    (98, 79),
];

/// Ladders on the standard board, bottom to top.
pub const DEFAULT_LADDERS: [(u8, u8); 8] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (51, 67),
    (72, 91),
    (80, 99),
];

/// Kind of transport rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    Snake,
    Ladder,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportKind::Snake => write!(f, "snake"),
            TransportKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// One snake or ladder taken by a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transport {
    pub kind: TransportKind,
    pub from: Cell,
    pub to: Cell,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.from, self.to)
    }
}

/// Transports taken on one landing, in order. Chains longer than two are rare.
pub type TransportPath = SmallVec<[Transport; 2]>;

/// The cell a token settles on after chasing every transport from a landing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing {
    pub cell: Cell,
    pub path: TransportPath,
}

/// Immutable snake and ladder tables for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardTopology {
    snakes: FxHashMap<Cell, Cell>,
    ladders: FxHashMap<Cell, Cell>,
}

impl Default for BoardTopology {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardTopology {
    /// The standard layout.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            snakes: table(&DEFAULT_SNAKES),
            ladders: table(&DEFAULT_LADDERS),
        }
    }

    /// A board with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Build and validate a custom layout.
    ///
    /// `snakes` are `(head, tail)` pairs and `ladders` are `(bottom, top)`
    /// pairs, as raw cell numbers.
    pub fn new(
        snakes: impl IntoIterator<Item = (u8, u8)>,
        ladders: impl IntoIterator<Item = (u8, u8)>,
    ) -> Result<Self, TopologyError> {
        let mut topology = Self::empty();

        for (head, tail) in snakes {
            if head <= tail {
                return Err(TopologyError::SnakeNotDescending { head, tail });
            }
            let (head_cell, tail_cell) = (Cell::try_from(head)?, Cell::try_from(tail)?);
            if topology.snakes.insert(head_cell, tail_cell).is_some() {
                return Err(TopologyError::DuplicateStart(head));
            }
        }

        for (bottom, top) in ladders {
            if bottom >= top {
                return Err(TopologyError::LadderNotAscending { bottom, top });
            }
            let (bottom_cell, top_cell) = (Cell::try_from(bottom)?, Cell::try_from(top)?);
            if topology.snakes.contains_key(&bottom_cell) {
                return Err(TopologyError::HeadBottomCollision(bottom));
            }
            if topology.ladders.insert(bottom_cell, top_cell).is_some() {
                return Err(TopologyError::DuplicateStart(bottom));
            }
        }

        topology.check_chains()?;
        Ok(topology)
    }

    /// Every chain must reach a plain cell without revisiting one.
    fn check_chains(&self) -> Result<(), TopologyError> {
        for start in self.snakes.keys().chain(self.ladders.keys()) {
            let mut seen = FxHashSet::default();
            let mut current = *start;
            while let Some(next) = self.transport_at(current) {
                if !seen.insert(current) {
                    return Err(TopologyError::Cycle {
                        start: start.number(),
                    });
                }
                current = next.to;
            }
        }
        Ok(())
    }

    /// The snake or ladder starting at `cell`, if any.
    ///
    /// Snakes are checked first; construction guarantees a cell never starts
    /// both.
    #[must_use]
    pub fn transport_at(&self, cell: Cell) -> Option<Transport> {
        if let Some(&to) = self.snakes.get(&cell) {
            return Some(Transport {
                kind: TransportKind::Snake,
                from: cell,
                to,
            });
        }
        self.ladders.get(&cell).map(|&to| Transport {
            kind: TransportKind::Ladder,
            from: cell,
            to,
        })
    }

    /// Apply a single transport step: the tail of a snake, the top of a
    /// ladder, or the cell itself.
    #[must_use]
    pub fn resolve_landing(&self, cell: Cell) -> Cell {
        self.transport_at(cell).map_or(cell, |t| t.to)
    }

    /// Follow transports from `cell` until the token settles.
    #[must_use]
    pub fn resolve_chain(&self, cell: Cell) -> Landing {
        let mut path = TransportPath::new();
        let mut current = cell;
        while let Some(transport) = self.transport_at(current) {
            path.push(transport);
            current = transport.to;
        }
        Landing {
            cell: current,
            path,
        }
    }

    /// Whether `cell` is a snake head or ladder bottom.
    #[must_use]
    pub fn is_special(&self, cell: Cell) -> bool {
        self.snakes.contains_key(&cell) || self.ladders.contains_key(&cell)
    }

    /// Snakes as `(head, tail)`, sorted by head.
    #[must_use]
    pub fn snakes(&self) -> Vec<(Cell, Cell)> {
        sorted(&self.snakes)
    }

    /// Ladders as `(bottom, top)`, sorted by bottom.
    #[must_use]
    pub fn ladders(&self) -> Vec<(Cell, Cell)> {
        sorted(&self.ladders)
    }
}

/// Tables known to be valid; checked by `test_standard_matches_validated_defaults`.
fn table(pairs: &[(u8, u8)]) -> FxHashMap<Cell, Cell> {
    pairs
        .iter()
        .filter_map(|&(from, to)| Some((Cell::new(from)?, Cell::new(to)?)))
        .collect()
}

fn sorted(map: &FxHashMap<Cell, Cell>) -> Vec<(Cell, Cell)> {
    let mut pairs: Vec<_> = map.iter().map(|(&a, &b)| (a, b)).collect();
    pairs.sort_unstable();
    pairs
}
