#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state for Tile Defence.
//!
//! The board owns a fixed grid of [`Tile`] values and the [`ContentPool`]
//! that issues their content. Every wall or destination toggle is applied
//! tentatively, validated by recomputing the full path field, and rolled back
//! when any tile would lose its path to a destination.

mod content;
mod error;
mod navigation;
mod tile;

use tile_defence_core::{
    CellCoord, Command, ContentType, Direction, Event, PlacementError, UNREACHABLE_DISTANCE,
};
use tracing::{debug, trace};

pub use content::{ContentObject, ContentPool, PoolId};
pub use error::{BoardError, PathError};
pub use tile::Tile;

use navigation::SearchFailure;

/// Dimensions and initial layout used to construct a [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    columns: u32,
    rows: u32,
    destination: Option<CellCoord>,
    show_paths: bool,
}

impl BoardConfig {
    /// Creates a configuration for a grid with the provided dimensions.
    ///
    /// The initial destination defaults to the tile halfway through the
    /// row-major tile order and path indicators start hidden.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            destination: None,
            show_paths: false,
        }
    }

    /// Places the initial destination at the provided cell.
    #[must_use]
    pub const fn with_destination(mut self, cell: CellCoord) -> Self {
        self.destination = Some(cell);
        self
    }

    /// Sets whether path indicators are visible from the start.
    #[must_use]
    pub const fn with_path_visibility(mut self, visible: bool) -> Self {
        self.show_paths = visible;
        self
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Explicit initial destination, if one was configured.
    #[must_use]
    pub const fn destination(&self) -> Option<CellCoord> {
        self.destination
    }

    /// Whether path indicators start visible.
    #[must_use]
    pub const fn show_paths(&self) -> bool {
        self.show_paths
    }
}

/// Fixed-size grid of tiles with a validated path field.
#[derive(Debug)]
pub struct Board {
    columns: u32,
    rows: u32,
    width: usize,
    tiles: Vec<Tile>,
    pool: ContentPool,
    show_paths: bool,
}

impl Board {
    /// Builds a board of empty tiles holding a single destination.
    ///
    /// # Errors
    ///
    /// - [`BoardError::EmptyGrid`] when either dimension is zero.
    /// - [`BoardError::TooLarge`] when the tile count does not fit the index space.
    /// - [`BoardError::DestinationOutOfBounds`] when the configured destination
    ///   lies outside the grid.
    pub fn new(config: BoardConfig, mut pool: ContentPool) -> Result<Self, BoardError> {
        let columns = config.columns();
        let rows = config.rows();
        if columns == 0 || rows == 0 {
            return Err(BoardError::EmptyGrid { columns, rows });
        }

        let tile_count = u64::from(columns) * u64::from(rows);
        let too_large = BoardError::TooLarge { columns, rows };
        if tile_count >= u64::from(UNREACHABLE_DISTANCE) {
            return Err(too_large);
        }
        let tile_count = usize::try_from(tile_count).map_err(|_| too_large)?;
        let width = usize::try_from(columns).map_err(|_| too_large)?;

        let destination = match config.destination() {
            Some(cell) if cell.column() >= columns || cell.row() >= rows => {
                return Err(BoardError::DestinationOutOfBounds {
                    cell,
                    columns,
                    rows,
                });
            }
            Some(cell) => cell,
            None => cell_at(width, tile_count / 2),
        };

        let mut tiles = Vec::with_capacity(tile_count);
        for index in 0..tile_count {
            let cell = cell_at(width, index);
            let alternative = (cell.column() + cell.row()) % 2 == 1;
            tiles.push(Tile::new(pool.acquire(ContentType::Empty), alternative));

            if cell.column() > 0 {
                tile::link(&mut tiles, index, Direction::West, index - 1);
            }
            if cell.row() > 0 {
                tile::link(&mut tiles, index, Direction::South, index - width);
            }
        }

        let mut board = Self {
            columns,
            rows,
            width,
            tiles,
            pool,
            show_paths: config.show_paths(),
        };
        let placed = board.toggle_destination(destination);
        debug_assert_eq!(placed, Event::DestinationPlaced { cell: destination });
        Ok(board)
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Whether path indicators are refreshed after each recompute.
    #[must_use]
    pub const fn paths_visible(&self) -> bool {
        self.show_paths
    }

    /// Retrieves the tile at the provided cell, or `None` outside the board.
    #[must_use]
    pub fn lookup(&self, cell: CellCoord) -> Option<&Tile> {
        self.index(cell).map(|index| &self.tiles[index])
    }

    /// Recomputes the path field from every destination.
    ///
    /// On failure the tiles keep whatever partial state the search produced;
    /// callers are expected to revert their mutation and recompute again.
    pub fn recompute_paths(&mut self) -> Result<(), PathError> {
        navigation::find_paths(&mut self.tiles).map_err(|failure| match failure {
            SearchFailure::NoSources => PathError::NoDestination,
            SearchFailure::Unreached(index) => PathError::Unreachable {
                cell: cell_at(self.width(), index),
            },
        })?;
        trace!(tiles = self.tiles.len(), "path field rebuilt");

        if self.show_paths {
            for tile in &mut self.tiles {
                tile.show_path();
            }
        }
        Ok(())
    }

    /// Removes the destination at `cell`, or places one on an empty tile.
    ///
    /// Removing the last destination, or one whose removal would strand a
    /// tile, is rolled back.
    pub fn toggle_destination(&mut self, cell: CellCoord) -> Event {
        let content = ContentType::Destination;
        let Some(index) = self.index(cell) else {
            return rejected(cell, content, PlacementError::OutOfBounds);
        };

        match self.tiles[index].content_type() {
            ContentType::Destination => {
                match self.attempt(index, ContentType::Empty, ContentType::Destination) {
                    Ok(()) => Event::DestinationRemoved { cell },
                    Err(reason) => rejected(cell, content, reason),
                }
            }
            ContentType::Empty => {
                match self.attempt(index, ContentType::Destination, ContentType::Empty) {
                    Ok(()) => Event::DestinationPlaced { cell },
                    Err(reason) => rejected(cell, content, reason),
                }
            }
            ContentType::Wall => rejected(cell, content, PlacementError::Occupied),
        }
    }

    /// Clears the wall at `cell`, or places one on an empty tile.
    ///
    /// A wall that would strand any tile is rolled back.
    pub fn toggle_wall(&mut self, cell: CellCoord) -> Event {
        let content = ContentType::Wall;
        let Some(index) = self.index(cell) else {
            return rejected(cell, content, PlacementError::OutOfBounds);
        };

        match self.tiles[index].content_type() {
            ContentType::Wall => match self.attempt(index, ContentType::Empty, ContentType::Wall) {
                Ok(()) => Event::WallRemoved { cell },
                Err(reason) => rejected(cell, content, reason),
            },
            ContentType::Empty => match self.attempt(index, ContentType::Wall, ContentType::Empty) {
                Ok(()) => Event::WallPlaced { cell },
                Err(reason) => rejected(cell, content, reason),
            },
            ContentType::Destination => rejected(cell, content, PlacementError::Occupied),
        }
    }

    /// Shows or hides every tile's path indicator.
    pub fn set_path_visibility(&mut self, visible: bool) -> Event {
        self.show_paths = visible;
        for tile in &mut self.tiles {
            if visible {
                tile.show_path();
            } else {
                tile.hide_path();
            }
        }
        Event::PathVisibilityChanged { visible }
    }

    /// Swaps the content at `index` and keeps it only if the grid stays connected.
    fn attempt(
        &mut self,
        index: usize,
        proposed: ContentType,
        previous: ContentType,
    ) -> Result<(), PlacementError> {
        self.replace_content(index, proposed);
        let Err(error) = self.recompute_paths() else {
            return Ok(());
        };

        debug!(
            cell = %cell_at(self.width(), index),
            ?proposed,
            %error,
            "placement rolled back"
        );
        self.replace_content(index, previous);
        let restored = self.recompute_paths();
        debug_assert!(
            restored.is_ok(),
            "reverted board must be fully connected: {restored:?}"
        );
        Err(error.into())
    }

    fn replace_content(&mut self, index: usize, kind: ContentType) {
        let content = self.pool.acquire(kind);
        self.tiles[index].set_content(content, &mut self.pool);
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            Some(row * self.width() + column)
        } else {
            None
        }
    }

    const fn width(&self) -> usize {
        self.width
    }
}

/// Applies the provided command to the board, reporting its outcome.
pub fn apply(board: &mut Board, command: Command, out_events: &mut Vec<Event>) {
    let event = match command {
        Command::ToggleWall { cell } => board.toggle_wall(cell),
        Command::ToggleDestination { cell } => board.toggle_destination(cell),
        Command::SetPathVisibility { visible } => board.set_path_visibility(visible),
    };
    if let Event::PlacementRejected { cell, reason, .. } = event {
        debug!(%cell, ?reason, "command rejected");
    }
    out_events.push(event);
}

/// Query functions that provide read-only access to the board state.
pub mod query {
    use tile_defence_core::{BoardView, CellCoord, ContentType, TileSnapshot};

    use super::{cell_at, Board, ContentPool, Tile};

    /// Retrieves the tile at the provided cell, if it lies on the board.
    #[must_use]
    pub fn tile(board: &Board, cell: CellCoord) -> Option<&Tile> {
        board.lookup(cell)
    }

    /// Captures the content type of every tile in row-major order.
    #[must_use]
    pub fn content_layout(board: &Board) -> Vec<ContentType> {
        board.tiles.iter().map(Tile::content_type).collect()
    }

    /// Enumerates the cells currently holding a destination.
    #[must_use]
    pub fn destinations(board: &Board) -> Vec<CellCoord> {
        cells_holding(board, ContentType::Destination)
    }

    /// Enumerates the cells currently holding a wall.
    #[must_use]
    pub fn walls(board: &Board) -> Vec<CellCoord> {
        cells_holding(board, ContentType::Wall)
    }

    /// Follows next hops from `cell` until a destination is reached.
    ///
    /// The returned path starts at `cell` and ends at the destination. Returns
    /// `None` when the cell lies outside the board or has no path.
    #[must_use]
    pub fn path_from(board: &Board, cell: CellCoord) -> Option<Vec<CellCoord>> {
        let mut current = board.index(cell)?;
        let tile = &board.tiles[current];
        if !tile.has_path() {
            return None;
        }

        let width = board.width();
        let mut path = vec![cell];
        while board.tiles[current].distance() > 0 {
            let direction = board.tiles[current].next_hop()?;
            current = board.tiles[current].neighbor(direction)?;
            path.push(cell_at(width, current));
        }
        Some(path)
    }

    /// Captures a read-only view of every tile for presentation.
    #[must_use]
    pub fn board_view(board: &Board) -> BoardView {
        let width = board.width();
        let tiles = board
            .tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| TileSnapshot {
                cell: cell_at(width, index),
                content: tile.content_type(),
                distance: tile.distance(),
                next_hop: tile.next_hop(),
                path_indicator: tile.path_indicator(),
            })
            .collect();
        BoardView::new(board.columns, board.rows, tiles)
    }

    /// Provides read-only access to the pool that issues the board's content.
    #[must_use]
    pub fn pool(board: &Board) -> &ContentPool {
        &board.pool
    }

    fn cells_holding(board: &Board, kind: ContentType) -> Vec<CellCoord> {
        let width = board.width();
        board
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.content_type() == kind)
            .map(|(index, _)| cell_at(width, index))
            .collect()
    }
}

fn rejected(cell: CellCoord, content: ContentType, reason: PlacementError) -> Event {
    Event::PlacementRejected {
        cell,
        content,
        reason,
    }
}

fn cell_at(width: usize, index: usize) -> CellCoord {
    let column = u32::try_from(index % width).unwrap_or(u32::MAX);
    let row = u32::try_from(index / width).unwrap_or(u32::MAX);
    CellCoord::new(column, row)
}
