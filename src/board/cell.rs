//! Board cells, player positions, and the zigzag grid mapping.
//!
//! Cell 1 sits in the bottom-left corner. Numbering runs left to right along
//! the bottom row, turns up, runs right to left along the next row, and keeps
//! alternating until cell 100 in the top-left corner.
//!
//! ```text
//! row 0  100 99 98 97 96 95 94 93 92 91
//! row 1   81 82 83 84 85 86 87 88 89 90
//! ...
//! row 8   20 19 18 17 16 15 14 13 12 11
//! row 9    1  2  3  4  5  6  7  8  9 10
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// Width and height of the board.
pub const GRID_SIZE: u8 = 10;

/// A numbered square on the board, always in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// The entry square.
    pub const START: Cell = Cell(1);
    /// The goal square.
    pub const GOAL: Cell = Cell(100);

    /// Validate a cell number.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (Self::START.0..=Self::GOAL.0)
            .contains(&number)
            .then_some(Self(number))
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Advance by `steps`, or `None` if that would pass the goal.
    #[must_use]
    pub fn advance(self, steps: u8) -> Option<Cell> {
        Cell::new(self.0.checked_add(steps)?)
    }

    /// Iterate over every cell from 1 to 100.
    pub fn all() -> impl Iterator<Item = Cell> {
        (Self::START.0..=Self::GOAL.0).map(Cell)
    }

    /// Grid coordinate of this cell.
    #[must_use]
    pub const fn coordinate(self) -> GridCoord {
        let zero_indexed = self.0 - 1;
        let row_from_bottom = zero_indexed / GRID_SIZE;
        let offset = zero_indexed % GRID_SIZE;
        let column = if row_from_bottom % 2 == 0 {
            offset
        } else {
            GRID_SIZE - 1 - offset
        };
        GridCoord {
            row: GRID_SIZE - 1 - row_from_bottom,
            column,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = TopologyError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Cell::new(number).ok_or(TopologyError::CellOutOfRange(number))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a raw cell number to its grid coordinate.
///
/// Returns `None` outside `1..=100`.
///
/// ```
/// use snakes_and_ladders::board::{cell_to_coordinate, GridCoord};
///
/// assert_eq!(cell_to_coordinate(1), Some(GridCoord { row: 9, column: 0 }));
/// assert_eq!(cell_to_coordinate(11), Some(GridCoord { row: 8, column: 9 }));
/// assert_eq!(cell_to_coordinate(100), Some(GridCoord { row: 0, column: 0 }));
/// assert_eq!(cell_to_coordinate(0), None);
/// ```
#[must_use]
pub fn cell_to_coordinate(number: u8) -> Option<GridCoord> {
    Cell::new(number).map(Cell::coordinate)
}

/// Row and column on the 10×10 grid.
///
/// `row` 0 is the top of the board as drawn, `row` 9 the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: u8,
    pub column: u8,
}

impl GridCoord {
    /// Row counted from the bottom edge, where cell 1 lives.
    #[must_use]
    pub const fn row_from_bottom(self) -> u8 {
        GRID_SIZE - 1 - self.row
    }

    /// Whether numbers increase left to right along this row.
    #[must_use]
    pub const fn runs_left_to_right(self) -> bool {
        self.row_from_bottom() % 2 == 0
    }

    /// Inverse of `Cell::coordinate`. `None` if the coordinate is off-grid.
    #[must_use]
    pub fn cell(self) -> Option<Cell> {
        if self.row >= GRID_SIZE || self.column >= GRID_SIZE {
            return None;
        }
        let offset = if self.runs_left_to_right() {
            self.column
        } else {
            GRID_SIZE - 1 - self.column
        };
        Cell::new(self.row_from_bottom() * GRID_SIZE + offset + 1)
    }
}

/// Where a player's token is: waiting off the board, or on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    /// Not yet entered. A six is needed to come on at cell 1.
    #[default]
    OffBoard,
    OnBoard(Cell),
}

impl Position {
    /// Position as a number: 0 for off-board, otherwise the cell number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Position::OffBoard => 0,
            Position::OnBoard(cell) => cell.number(),
        }
    }

    #[must_use]
    pub const fn cell(self) -> Option<Cell> {
        match self {
            Position::OffBoard => None,
            Position::OnBoard(cell) => Some(cell),
        }
    }

    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Position::OffBoard)
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        Position::OnBoard(cell)
    }
}

impl TryFrom<u8> for Position {
    type Error = TopologyError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            0 => Ok(Position::OffBoard),
            n => Cell::try_from(n).map(Position::OnBoard),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.number()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::OffBoard => write!(f, "not started"),
            Position::OnBoard(cell) => write!(f, "cell {cell}"),
        }
    }
}
