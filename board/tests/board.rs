use tile_defence_board::{self as board, query, Board, BoardConfig, ContentPool, PathError, Tile};
use tile_defence_core::{CellCoord, Command, ContentType, Direction, Event, PlacementError};

fn board_with_destination(columns: u32, rows: u32, destination: CellCoord) -> Board {
    Board::new(
        BoardConfig::new(columns, rows).with_destination(destination),
        ContentPool::new(),
    )
    .expect("valid board configuration")
}

fn distance_at(board: &Board, column: u32, row: u32) -> u32 {
    board
        .lookup(CellCoord::new(column, row))
        .map(Tile::distance)
        .expect("cell inside board")
}

fn assert_fully_connected(board: &Board) {
    for tile in query::board_view(board).iter() {
        let path = query::path_from(board, tile.cell)
            .unwrap_or_else(|| panic!("tile {} has no path", tile.cell));
        let hops = u32::try_from(path.len() - 1).expect("path length fits u32");
        assert_eq!(hops, tile.distance, "tile {} path length", tile.cell);

        let end = *path.last().expect("path is never empty");
        let end_tile = board.lookup(end).expect("path stays on the board");
        assert_eq!(end_tile.distance(), 0);
        assert_eq!(end_tile.content_type(), ContentType::Destination);
    }
}

#[test]
fn full_wall_column_is_rejected_and_reverted() {
    let mut board = board_with_destination(4, 3, CellCoord::new(2, 1));
    let mut events = Vec::new();

    board::apply(
        &mut board,
        Command::ToggleWall {
            cell: CellCoord::new(1, 0),
        },
        &mut events,
    );
    board::apply(
        &mut board,
        Command::ToggleWall {
            cell: CellCoord::new(1, 2),
        },
        &mut events,
    );
    let before = query::content_layout(&board);

    board::apply(
        &mut board,
        Command::ToggleWall {
            cell: CellCoord::new(1, 1),
        },
        &mut events,
    );

    assert_eq!(
        events,
        vec![
            Event::WallPlaced {
                cell: CellCoord::new(1, 0)
            },
            Event::WallPlaced {
                cell: CellCoord::new(1, 2)
            },
            Event::PlacementRejected {
                cell: CellCoord::new(1, 1),
                content: ContentType::Wall,
                reason: PlacementError::Disconnected,
            },
        ]
    );
    assert_eq!(query::content_layout(&board), before);
    assert_eq!(
        board.lookup(CellCoord::new(1, 1)).map(Tile::content_type),
        Some(ContentType::Empty)
    );
    assert_fully_connected(&board);
}

#[test]
fn single_wall_reroutes_neighbor_by_two_hops() {
    let mut board = board_with_destination(4, 3, CellCoord::new(2, 1));
    let unwalled = distance_at(&board, 0, 1);

    let event = board.toggle_wall(CellCoord::new(1, 1));

    assert_eq!(
        event,
        Event::WallPlaced {
            cell: CellCoord::new(1, 1)
        }
    );
    assert_eq!(unwalled, 2);
    assert_eq!(distance_at(&board, 0, 1), unwalled + 2);
    let next_hop = board
        .lookup(CellCoord::new(0, 1))
        .and_then(Tile::next_hop);
    assert!(
        matches!(next_hop, Some(Direction::North | Direction::South)),
        "expected a detour through (0, 0) or (0, 2), got {next_hop:?}",
    );
    assert_eq!(distance_at(&board, 1, 1), 1, "walls are still reached");
    assert_fully_connected(&board);
}

#[test]
fn single_tile_board_is_its_own_destination() {
    let mut board = Board::new(BoardConfig::new(1, 1), ContentPool::new())
        .expect("valid board configuration");

    assert_eq!(board.recompute_paths(), Ok(()));
    assert_eq!(distance_at(&board, 0, 0), 0);
    assert_eq!(
        board.lookup(CellCoord::new(0, 0)).and_then(Tile::next_hop),
        None
    );
}

#[test]
fn isolating_a_corner_is_rejected() {
    let mut board = board_with_destination(3, 3, CellCoord::new(2, 2));

    assert_eq!(
        board.toggle_wall(CellCoord::new(1, 0)),
        Event::WallPlaced {
            cell: CellCoord::new(1, 0)
        }
    );
    let before = query::content_layout(&board);

    let event = board.toggle_wall(CellCoord::new(0, 1));

    assert!(matches!(
        event,
        Event::PlacementRejected {
            reason: PlacementError::Disconnected,
            ..
        }
    ));
    assert_eq!(query::content_layout(&board), before);
    assert_fully_connected(&board);
}

#[test]
fn recompute_is_idempotent() {
    let mut board = board_with_destination(6, 5, CellCoord::new(3, 2));
    for cell in [CellCoord::new(1, 1), CellCoord::new(2, 3), CellCoord::new(4, 1)] {
        let _ = board.toggle_wall(cell);
    }
    let _ = board.toggle_destination(CellCoord::new(0, 4));

    assert_eq!(board.recompute_paths(), Ok(()));
    let first = query::board_view(&board);
    assert_eq!(board.recompute_paths(), Ok(()));
    let second = query::board_view(&board);

    assert_eq!(first, second);
}

#[test]
fn last_destination_survives_removal_attempts() {
    let mut board = board_with_destination(4, 4, CellCoord::new(1, 1));
    let _ = board.toggle_destination(CellCoord::new(3, 3));

    assert_eq!(
        board.toggle_destination(CellCoord::new(1, 1)),
        Event::DestinationRemoved {
            cell: CellCoord::new(1, 1)
        }
    );
    assert_eq!(
        board.toggle_destination(CellCoord::new(3, 3)),
        Event::PlacementRejected {
            cell: CellCoord::new(3, 3),
            content: ContentType::Destination,
            reason: PlacementError::NoDestination,
        }
    );
    assert_eq!(query::destinations(&board), vec![CellCoord::new(3, 3)]);
    assert_fully_connected(&board);
}

#[test]
fn destination_removal_that_strands_a_pocket_is_rejected() {
    let mut board = board_with_destination(5, 1, CellCoord::new(4, 0));
    assert_eq!(
        board.toggle_destination(CellCoord::new(0, 0)),
        Event::DestinationPlaced {
            cell: CellCoord::new(0, 0)
        }
    );
    assert_eq!(
        board.toggle_wall(CellCoord::new(2, 0)),
        Event::WallPlaced {
            cell: CellCoord::new(2, 0)
        }
    );

    let event = board.toggle_destination(CellCoord::new(0, 0));

    assert_eq!(
        event,
        Event::PlacementRejected {
            cell: CellCoord::new(0, 0),
            content: ContentType::Destination,
            reason: PlacementError::Disconnected,
        }
    );
    assert_eq!(
        query::destinations(&board),
        vec![CellCoord::new(0, 0), CellCoord::new(4, 0)]
    );
    assert_fully_connected(&board);
}

#[test]
fn unreachable_error_names_the_cell() {
    assert_eq!(
        PathError::Unreachable {
            cell: CellCoord::new(2, 0)
        }
        .to_string(),
        "tile (2, 0) cannot reach any destination"
    );
}

#[test]
fn path_visibility_command_reports_change() {
    let mut board = board_with_destination(3, 3, CellCoord::new(1, 1));
    let mut events = Vec::new();

    board::apply(
        &mut board,
        Command::SetPathVisibility { visible: true },
        &mut events,
    );

    assert_eq!(events, vec![Event::PathVisibilityChanged { visible: true }]);
    assert!(board.paths_visible());
    let view = query::board_view(&board);
    let corner = view.tile(CellCoord::new(0, 0)).expect("corner tile");
    assert_eq!(corner.path_indicator, corner.next_hop);
    assert!(corner.path_indicator.is_some());
}

#[test]
fn tile_query_agrees_with_lookup() {
    let mut board = board_with_destination(3, 2, CellCoord::new(0, 0));
    let mut events = Vec::new();
    board::apply(
        &mut board,
        Command::ToggleWall {
            cell: CellCoord::new(2, 1),
        },
        &mut events,
    );

    for tile in query::board_view(&board).iter() {
        let queried = query::tile(&board, tile.cell).expect("cell inside board");
        let looked_up = board.lookup(tile.cell).expect("cell inside board");
        assert!(std::ptr::eq(queried, looked_up));
        assert_eq!(queried.content_type(), tile.content);
        assert_eq!(queried.distance(), tile.distance);
    }
    assert!(query::tile(&board, CellCoord::new(3, 0)).is_none());
    assert!(query::tile(&board, CellCoord::new(0, 2)).is_none());
}
