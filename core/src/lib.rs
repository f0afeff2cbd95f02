#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Tile Defence board.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative board, and pure systems. Adapters submit [`Command`] values
//! describing desired placements, the board executes those commands via its
//! `apply` entry point, and then reports [`Event`] values describing what was
//! committed or rejected. Read-only [`BoardView`] snapshots expose the computed
//! path field to presentation code without leaking board internals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel distance carried by tiles that cannot reach any destination.
pub const UNREACHABLE_DISTANCE: u32 = u32::MAX;

/// Commands that express all permissible board mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Places a wall on an empty tile or clears an existing wall.
    ToggleWall {
        /// Tile targeted by the toggle.
        cell: CellCoord,
    },
    /// Places a destination on an empty tile or clears an existing destination.
    ToggleDestination {
        /// Tile targeted by the toggle.
        cell: CellCoord,
    },
    /// Shows or hides the per-tile path indicators.
    SetPathVisibility {
        /// Whether presentation should display path indicators.
        visible: bool,
    },
}

/// Events reported by the board after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a wall was committed to the board.
    WallPlaced {
        /// Tile that now holds the wall.
        cell: CellCoord,
    },
    /// Confirms that a wall was cleared from the board.
    WallRemoved {
        /// Tile that held the wall.
        cell: CellCoord,
    },
    /// Confirms that a destination was committed to the board.
    DestinationPlaced {
        /// Tile that now holds the destination.
        cell: CellCoord,
    },
    /// Confirms that a destination was cleared from the board.
    DestinationRemoved {
        /// Tile that held the destination.
        cell: CellCoord,
    },
    /// Reports that a toggle was rolled back or never attempted.
    PlacementRejected {
        /// Tile targeted by the rejected toggle.
        cell: CellCoord,
        /// Content the toggle operates on.
        content: ContentType,
        /// Specific reason the toggle failed.
        reason: PlacementError,
    },
    /// Announces that path indicators were shown or hidden.
    PathVisibilityChanged {
        /// Visibility that became active.
        visible: bool,
    },
}

/// Reasons a toggle request may be rejected by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested tile lies outside the board.
    OutOfBounds,
    /// The tile holds content that the toggle does not operate on.
    Occupied,
    /// Committing the toggle would leave some tile without a path to any destination.
    Disconnected,
    /// Committing the toggle would leave the board without a destination.
    NoDestination,
}

/// Kinds of content a tile may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// Open ground that paths may cross.
    Empty,
    /// Obstacle that terminates paths.
    Wall,
    /// Goal that every path leads toward.
    Destination,
}

impl ContentType {
    /// Every content type supported by the board.
    pub const ALL: [ContentType; 3] = [Self::Empty, Self::Wall, Self::Destination];
}

/// Cardinal directions connecting neighboring tiles.
///
/// North points toward increasing row indices and East toward increasing
/// column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward increasing row indices.
    North,
    /// Toward increasing column indices.
    East,
    /// Toward decreasing row indices.
    South,
    /// Toward decreasing column indices.
    West,
}

impl Direction {
    /// All directions in clockwise order starting from North.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Stable index of the direction within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Location of a single tile expressed as column (x) and row (y) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Immutable representation of a single tile used by presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSnapshot {
    /// Grid cell addressed by the snapshot.
    pub cell: CellCoord,
    /// Content currently held by the tile.
    pub content: ContentType,
    /// Hop count to the nearest destination, or [`UNREACHABLE_DISTANCE`].
    pub distance: u32,
    /// Neighbor a path follower should move toward next.
    pub next_hop: Option<Direction>,
    /// Arrow direction presentation should display, if any.
    pub path_indicator: Option<Direction>,
}

impl TileSnapshot {
    /// Reports whether the tile reached a destination during the last path computation.
    #[must_use]
    pub const fn has_path(&self) -> bool {
        self.distance != UNREACHABLE_DISTANCE
    }
}

/// Read-only snapshot of every tile on the board in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardView {
    columns: u32,
    rows: u32,
    tiles: Vec<TileSnapshot>,
}

impl BoardView {
    /// Creates a new board view from row-major tile snapshots.
    #[must_use]
    pub fn new(columns: u32, rows: u32, tiles: Vec<TileSnapshot>) -> Self {
        Self {
            columns,
            rows,
            tiles,
        }
    }

    /// Number of tile columns captured by the view.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows captured by the view.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Snapshot of the tile stored at the provided cell, if it lies on the board.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<&TileSnapshot> {
        if cell.column() >= self.columns || cell.row() >= self.rows {
            return None;
        }
        let width = usize::try_from(self.columns).ok()?;
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        self.tiles.get(row.checked_mul(width)?.checked_add(column)?)
    }

    /// Iterator over the captured tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &TileSnapshot> {
        self.tiles.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TileSnapshot> {
        self.tiles
    }
}
