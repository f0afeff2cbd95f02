//! Grid cells and the per-tile path state they carry.

use std::mem;

use tile_defence_core::{ContentType, Direction, UNREACHABLE_DISTANCE};

use crate::content::{ContentObject, ContentPool};

const NORTH_FIRST: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

const WEST_FIRST: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::South,
    Direction::North,
];

/// Single cell of the board.
///
/// Neighbor relations are stored as indices into the board's tile arena and
/// are fixed once the grid has been linked.
#[derive(Debug)]
pub struct Tile {
    content: ContentObject,
    neighbors: [Option<usize>; 4],
    alternative: bool,
    distance: u32,
    next_hop: Option<Direction>,
    path_indicator: Option<Direction>,
}

impl Tile {
    /// Creates an unlinked tile holding the provided content with a cleared path.
    pub(crate) fn new(content: ContentObject, alternative: bool) -> Self {
        Self {
            content,
            neighbors: [None; 4],
            alternative,
            distance: UNREACHABLE_DISTANCE,
            next_hop: None,
            path_indicator: None,
        }
    }

    /// Content currently owned by the tile.
    #[must_use]
    pub fn content(&self) -> &ContentObject {
        &self.content
    }

    /// Type of the content currently owned by the tile.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content.kind()
    }

    /// Hop count to the nearest destination, or [`UNREACHABLE_DISTANCE`].
    #[must_use]
    pub const fn distance(&self) -> u32 {
        self.distance
    }

    /// Reports whether the last path computation reached this tile.
    #[must_use]
    pub const fn has_path(&self) -> bool {
        self.distance != UNREACHABLE_DISTANCE
    }

    /// Neighbor a path follower standing on this tile should move toward.
    #[must_use]
    pub const fn next_hop(&self) -> Option<Direction> {
        self.next_hop
    }

    /// Arrow currently displayed for the tile, if path visibility is on.
    #[must_use]
    pub const fn path_indicator(&self) -> Option<Direction> {
        self.path_indicator
    }

    /// Whether the tile sits on the odd checkerboard parity.
    #[must_use]
    pub const fn is_alternative(&self) -> bool {
        self.alternative
    }

    /// Order in which the search expands this tile's neighbors.
    pub(crate) const fn expansion_order(&self) -> [Direction; 4] {
        if self.alternative {
            NORTH_FIRST
        } else {
            WEST_FIRST
        }
    }

    pub(crate) const fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors[direction.index()]
    }

    /// Swaps in new content, returning the previous object to its pool.
    pub(crate) fn set_content(&mut self, content: ContentObject, pool: &mut ContentPool) {
        let previous = mem::replace(&mut self.content, content);
        pool.release(previous);
    }

    pub(crate) fn clear_path(&mut self) {
        self.distance = UNREACHABLE_DISTANCE;
        self.next_hop = None;
    }

    pub(crate) fn become_destination(&mut self) {
        self.distance = 0;
        self.next_hop = None;
    }

    pub(crate) fn show_path(&mut self) {
        self.path_indicator = if self.distance == 0 {
            None
        } else {
            self.next_hop
        };
    }

    pub(crate) fn hide_path(&mut self) {
        self.path_indicator = None;
    }
}

/// Records that `to` is the neighbor of `from` in `direction`, and vice versa.
///
/// # Panics
///
/// Panics when either side of the relation was already defined.
pub(crate) fn link(tiles: &mut [Tile], from: usize, direction: Direction, to: usize) {
    let back = direction.opposite();
    assert!(
        tiles[from].neighbor(direction).is_none() && tiles[to].neighbor(back).is_none(),
        "redefined {direction:?} neighbor of tile {from}"
    );
    tiles[from].neighbors[direction.index()] = Some(to);
    tiles[to].neighbors[back.index()] = Some(from);
}

/// Extends the path of tile `from` one hop into its neighbor in `direction`.
///
/// Returns the neighbor's index when it was newly reached and may be expanded
/// further. Walls are reached but never returned.
///
/// # Panics
///
/// Panics when `from` has no path of its own.
pub(crate) fn grow_path_to(tiles: &mut [Tile], from: usize, direction: Direction) -> Option<usize> {
    let source = &tiles[from];
    assert!(source.has_path(), "tile {from} has no path to grow");
    let target = source.neighbor(direction)?;
    let distance = source.distance + 1;

    let neighbor = &mut tiles[target];
    if neighbor.has_path() {
        return None;
    }

    neighbor.distance = distance;
    neighbor.next_hop = Some(direction.opposite());
    (neighbor.content_type() != ContentType::Wall).then_some(target)
}
