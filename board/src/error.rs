//! Errors surfaced by board construction and path computation.

use thiserror::Error;
use tile_defence_core::{CellCoord, PlacementError};

/// Reasons a board configuration cannot be turned into a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// One of the dimensions is zero.
    #[error("board dimensions must be non-zero, got {columns}x{rows}")]
    EmptyGrid {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// The grid holds more tiles than distances can count.
    #[error("board of {columns}x{rows} tiles exceeds the supported tile count")]
    TooLarge {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// The initial destination does not address a tile.
    #[error("initial destination {cell} lies outside the {columns}x{rows} board")]
    DestinationOutOfBounds {
        /// Requested destination cell.
        cell: CellCoord,
        /// Configured number of columns.
        columns: u32,
        /// Configured number of rows.
        rows: u32,
    },
}

/// Reasons a path computation failed to cover the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// No tile holds a destination.
    #[error("the board holds no destination")]
    NoDestination,
    /// A tile cannot reach any destination.
    #[error("tile {cell} cannot reach any destination")]
    Unreachable {
        /// First unreachable tile in row-major order.
        cell: CellCoord,
    },
}

impl From<PathError> for PlacementError {
    fn from(error: PathError) -> Self {
        match error {
            PathError::NoDestination => PlacementError::NoDestination,
            PathError::Unreachable { .. } => PlacementError::Disconnected,
        }
    }
}
