//! Multi-source breadth-first path field built over the tile arena.

use std::collections::VecDeque;

use tile_defence_core::ContentType;
use tracing::trace;

use crate::tile::{self, Tile};

/// Outcome of a path search that failed to cover the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchFailure {
    /// No tile holds a destination, so the frontier was empty.
    NoSources,
    /// The tile at the provided index was never reached.
    Unreached(usize),
}

/// Rebuilds every tile's distance and next hop from the destinations outward.
///
/// Destinations seed the frontier with distance zero. Each dequeued tile grows
/// into its neighbors in its own expansion order, and every newly reached
/// non-wall tile joins the back of the frontier. The search succeeds only when
/// every tile, walls included, was reached.
pub(crate) fn find_paths(tiles: &mut [Tile]) -> Result<(), SearchFailure> {
    let mut frontier = VecDeque::new();

    for (index, tile) in tiles.iter_mut().enumerate() {
        if tile.content_type() == ContentType::Destination {
            tile.become_destination();
            frontier.push_back(index);
        } else {
            tile.clear_path();
        }
    }

    if frontier.is_empty() {
        return Err(SearchFailure::NoSources);
    }
    trace!(sources = frontier.len(), "path search seeded");

    while let Some(current) = frontier.pop_front() {
        for direction in tiles[current].expansion_order() {
            if let Some(reached) = tile::grow_path_to(tiles, current, direction) {
                frontier.push_back(reached);
            }
        }
    }

    match tiles.iter().position(|tile| !tile.has_path()) {
        Some(index) => Err(SearchFailure::Unreached(index)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentPool;
    use tile_defence_core::{Direction, UNREACHABLE_DISTANCE};

    fn grid(pool: &mut ContentPool, width: usize, layout: &[ContentType]) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = layout
            .iter()
            .enumerate()
            .map(|(index, kind)| {
                let (column, row) = (index % width, index / width);
                Tile::new(pool.acquire(*kind), (column + row) % 2 == 1)
            })
            .collect();
        for index in 0..tiles.len() {
            if index % width > 0 {
                tile::link(&mut tiles, index, Direction::West, index - 1);
            }
            if index >= width {
                tile::link(&mut tiles, index, Direction::South, index - width);
            }
        }
        tiles
    }

    #[test]
    fn find_paths_sets_destination_cells_to_zero() {
        use ContentType::{Destination as D, Empty as E};
        let mut pool = ContentPool::new();
        #[rustfmt::skip]
        let mut tiles = grid(&mut pool, 3, &[
            E, E, E,
            E, E, E,
            E, D, E,
            E, E, E,
        ]);

        assert_eq!(find_paths(&mut tiles), Ok(()));
        assert_eq!(tiles[7].distance(), 0);
        assert_eq!(tiles[4].distance(), 1);
        assert_eq!(tiles[1].distance(), 2);
        assert_eq!(tiles[0].distance(), 3);
        assert_eq!(tiles[10].distance(), 1);
        assert_eq!(tiles[10].next_hop(), Some(Direction::South));
    }

    #[test]
    fn find_paths_routes_around_walls() {
        use ContentType::{Destination as D, Empty as E, Wall as W};
        let mut pool = ContentPool::new();
        #[rustfmt::skip]
        let mut tiles = grid(&mut pool, 3, &[
            E, E, E,
            E, W, E,
            E, D, E,
            E, E, E,
        ]);

        assert_eq!(find_paths(&mut tiles), Ok(()));
        assert_eq!(tiles[4].distance(), 1);
        assert_eq!(tiles[1].distance(), 4);
        assert_eq!(tiles[3].distance(), 2);
    }

    #[test]
    fn find_paths_fails_without_destinations() {
        let mut pool = ContentPool::new();
        let mut tiles = grid(&mut pool, 2, &[ContentType::Empty; 4]);

        assert_eq!(find_paths(&mut tiles), Err(SearchFailure::NoSources));
        assert!(tiles.iter().all(|tile| tile.distance() == UNREACHABLE_DISTANCE));
    }

    #[test]
    fn find_paths_reports_first_unreached_tile() {
        use ContentType::{Destination as D, Empty as E, Wall as W};
        let mut pool = ContentPool::new();
        #[rustfmt::skip]
        let mut tiles = grid(&mut pool, 3, &[
            E, W, D,
            E, W, E,
        ]);

        assert_eq!(find_paths(&mut tiles), Err(SearchFailure::Unreached(0)));
        assert!(tiles[1].has_path());
        assert!(tiles[4].has_path());
    }

    #[test]
    fn walls_are_reached_but_never_expanded() {
        use ContentType::{Destination as D, Wall as W};
        let mut pool = ContentPool::new();
        let mut tiles = grid(&mut pool, 3, &[D, W, W]);

        assert_eq!(find_paths(&mut tiles), Err(SearchFailure::Unreached(2)));
        assert_eq!(tiles[1].distance(), 1);
    }
}
