//! Board geometry and snake/ladder layout.
//!
//! Nothing in here is mutable once built. The turn engine works purely with
//! `Cell` numbers; `GridCoord` exists for whoever draws the board.

pub mod cell;
pub mod topology;

pub use cell::{cell_to_coordinate, Cell, GridCoord, Position, GRID_SIZE};
pub use topology::{
    BoardTopology, Landing, Transport, TransportKind, TransportPath, DEFAULT_LADDERS,
    DEFAULT_SNAKES,
};
