#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Tile Defence adapters.
//!
//! The board reports only grid coordinates, next-hop directions, and path
//! indicator state. This crate owns the geometry that turns those values into
//! world-space positions and arrow orientations, the inverse mapping used for
//! cursor picking, and a plain-text frame used by terminal adapters.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};
use thiserror::Error;
use tile_defence_core::{BoardView, CellCoord, ContentType, Direction, TileSnapshot};

/// Describes the world-space layout of a square tile grid centered on the origin.
///
/// Columns run along the X axis and rows along the Z axis; the ground plane
/// sits at `y = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGridPresentation {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Side length of a single tile expressed in world units.
    pub tile_length: f32,
}

impl TileGridPresentation {
    /// Creates a new tile grid descriptor.
    ///
    /// Returns an error when the grid has no area or the tile length is not a
    /// positive finite number.
    pub fn new(columns: u32, rows: u32, tile_length: f32) -> Result<Self, RenderingError> {
        if columns == 0 || rows == 0 {
            return Err(RenderingError::EmptyGrid { columns, rows });
        }
        if !tile_length.is_finite() || tile_length <= f32::EPSILON {
            return Err(RenderingError::InvalidTileLength { tile_length });
        }

        Ok(Self {
            columns,
            rows,
            tile_length,
        })
    }

    /// Calculates the total width of the grid.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.columns as f32 * self.tile_length
    }

    /// Calculates the total depth of the grid.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.rows as f32 * self.tile_length
    }

    /// World-space center of the provided tile, if it lies on the grid.
    #[must_use]
    pub fn tile_center(&self, cell: CellCoord) -> Option<Vec3> {
        if cell.column() >= self.columns || cell.row() >= self.rows {
            return None;
        }

        let offset_x = (self.columns as f32 - 1.0) * 0.5;
        let offset_z = (self.rows as f32 - 1.0) * 0.5;
        Some(Vec3::new(
            (cell.column() as f32 - offset_x) * self.tile_length,
            0.0,
            (cell.row() as f32 - offset_z) * self.tile_length,
        ))
    }

    /// Maps a ground-plane hit point back to the tile underneath it.
    ///
    /// Returns `None` when the point lies outside the grid.
    #[must_use]
    pub fn pick_cell(&self, hit: Vec3) -> Option<CellCoord> {
        let column = (hit.x / self.tile_length + self.columns as f32 * 0.5).floor();
        let row = (hit.z / self.tile_length + self.rows as f32 * 0.5).floor();
        if !column.is_finite() || !row.is_finite() || column < 0.0 || row < 0.0 {
            return None;
        }
        if column >= self.columns as f32 || row >= self.rows as f32 {
            return None;
        }

        Some(CellCoord::new(column as u32, row as u32))
    }
}

/// Orientation of a path arrow pointing toward `direction`.
///
/// The arrow model points along +Y; it is first laid flat onto the ground so
/// that it points along +Z, then yawed so that North maps to +Z and East to +X.
#[must_use]
pub fn arrow_rotation(direction: Direction) -> Quat {
    let yaw = match direction {
        Direction::North => 0.0,
        Direction::East => FRAC_PI_2,
        Direction::South => PI,
        Direction::West => PI + FRAC_PI_2,
    };
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(FRAC_PI_2)
}

/// Arrow that should be drawn above a tile while path visibility is on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathArrow {
    /// Tile the arrow belongs to.
    pub cell: CellCoord,
    /// Direction the arrow points toward.
    pub direction: Direction,
    /// World-space center of the tile.
    pub position: Vec3,
    /// Orientation applied to the arrow model.
    pub rotation: Quat,
}

/// Collects the arrows for every tile whose path indicator is shown.
pub fn path_arrows(
    grid: &TileGridPresentation,
    view: &BoardView,
) -> Result<Vec<PathArrow>, RenderingError> {
    ensure_matching_dimensions(grid, view)?;

    let arrows = view
        .iter()
        .filter_map(|tile| {
            let direction = tile.path_indicator?;
            let position = grid.tile_center(tile.cell)?;
            Some(PathArrow {
                cell: tile.cell,
                direction,
                position,
                rotation: arrow_rotation(direction),
            })
        })
        .collect();
    Ok(arrows)
}

/// Plain-text renderings of a board view with the highest row printed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextFrame;

impl TextFrame {
    /// Renders content and visible path indicators, one character per tile.
    ///
    /// Destinations print as `@`, walls as `#`, shown indicators as arrows,
    /// and every other tile as `.`.
    #[must_use]
    pub fn path_field(&self, view: &BoardView) -> String {
        render_rows(view, |tile| glyph(tile).to_string())
    }

    /// Renders the hop count of every tile, with `#` for walls and `?` for
    /// tiles that have no path.
    #[must_use]
    pub fn distances(&self, view: &BoardView) -> String {
        let widest = view
            .iter()
            .filter(|tile| tile.has_path())
            .map(|tile| tile.distance.to_string().len())
            .max()
            .unwrap_or(1);

        render_rows(view, |tile| {
            let label = match tile.content {
                ContentType::Wall => "#".to_owned(),
                _ if !tile.has_path() => "?".to_owned(),
                _ => tile.distance.to_string(),
            };
            format!("{label:>widest$} ")
        })
        .lines()
        .map(str::trim_end)
        .fold(String::new(), |mut frame, line| {
            frame.push_str(line);
            frame.push('\n');
            frame
        })
    }
}

fn render_rows(view: &BoardView, mut cell_text: impl FnMut(&TileSnapshot) -> String) -> String {
    let mut frame = String::new();
    for row in (0..view.rows()).rev() {
        for column in 0..view.columns() {
            if let Some(tile) = view.tile(CellCoord::new(column, row)) {
                frame.push_str(&cell_text(tile));
            }
        }
        frame.push('\n');
    }
    frame
}

fn glyph(tile: &TileSnapshot) -> char {
    match tile.content {
        ContentType::Destination => '@',
        ContentType::Wall => '#',
        ContentType::Empty => match tile.path_indicator {
            Some(Direction::North) => '^',
            Some(Direction::East) => '>',
            Some(Direction::South) => 'v',
            Some(Direction::West) => '<',
            None => '.',
        },
    }
}

fn ensure_matching_dimensions(
    grid: &TileGridPresentation,
    view: &BoardView,
) -> Result<(), RenderingError> {
    if grid.columns != view.columns() || grid.rows != view.rows() {
        return Err(RenderingError::DimensionMismatch {
            expected: format!("{}x{}", grid.columns, grid.rows),
            found: format!("{}x{}", view.columns(), view.rows()),
        });
    }
    Ok(())
}

/// Errors produced by presentation helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderingError {
    /// The grid has no tiles to present.
    #[error("tile grid must have a positive size, got {columns}x{rows}")]
    EmptyGrid {
        /// Number of columns requested.
        columns: u32,
        /// Number of rows requested.
        rows: u32,
    },
    /// The tile length cannot scale the grid into world space.
    #[error("tile length must be positive and finite, got {tile_length}")]
    InvalidTileLength {
        /// Tile length requested.
        tile_length: f32,
    },
    /// The board view does not match the presented grid.
    #[error("board view is {found} but the presented grid is {expected}")]
    DimensionMismatch {
        /// Dimensions of the presented grid.
        expected: String,
        /// Dimensions of the board view.
        found: String,
    },
}
