use tile_defence_board::{self as board, query, Board, BoardConfig, ContentPool};
use tile_defence_core::{CellCoord, Command, ContentType, Event};
use tile_defence_system_builder::{Builder, BuilderInput};

#[test]
fn wall_action_emits_wall_toggle_for_hovered_cell() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        &[],
        BuilderInput {
            toggle_wall: true,
            cursor_cell: Some(CellCoord::new(2, 3)),
            ..BuilderInput::default()
        },
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::ToggleWall {
            cell: CellCoord::new(2, 3),
        }],
        "builder should emit a wall toggle for the hovered cell",
    );
}

#[test]
fn destination_action_takes_precedence_over_wall_action() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        &[],
        BuilderInput::new(true, true, false, Some(CellCoord::new(1, 1))),
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::ToggleDestination {
            cell: CellCoord::new(1, 1),
        }],
    );
}

#[test]
fn placement_actions_ignored_without_hovered_cell() {
    let mut builder = Builder::default();
    let mut commands = Vec::new();

    builder.handle(
        &[],
        BuilderInput::new(true, true, false, None),
        &mut commands,
    );

    assert!(
        commands.is_empty(),
        "no hovered cell, nothing to toggle"
    );
}

#[test]
fn path_toggle_flips_observed_visibility() {
    let mut builder = Builder::new();
    let mut commands = Vec::new();
    let input = BuilderInput {
        toggle_paths: true,
        ..BuilderInput::default()
    };

    builder.handle(&[], input, &mut commands);
    builder.handle(
        &[Event::PathVisibilityChanged { visible: true }],
        input,
        &mut commands,
    );

    assert!(builder.paths_visible());
    assert_eq!(
        commands,
        vec![
            Command::SetPathVisibility { visible: true },
            Command::SetPathVisibility { visible: false },
        ],
    );
}

#[test]
fn builder_commands_drive_the_board() {
    let mut board = Board::new(
        BoardConfig::new(4, 3).with_destination(CellCoord::new(2, 1)),
        ContentPool::new(),
    )
    .expect("valid board configuration");
    let mut builder = Builder::with_path_visibility(board.paths_visible());
    let mut events = Vec::new();

    for input in [
        BuilderInput::new(true, false, false, Some(CellCoord::new(1, 0))),
        BuilderInput::new(true, false, false, Some(CellCoord::new(1, 2))),
        BuilderInput::new(true, false, true, Some(CellCoord::new(1, 1))),
    ] {
        let mut commands = Vec::new();
        builder.handle(&events, input, &mut commands);
        events.clear();
        for command in commands {
            board::apply(&mut board, command, &mut events);
        }
    }

    assert!(matches!(
        events.as_slice(),
        [
            Event::PathVisibilityChanged { visible: true },
            Event::PlacementRejected { .. },
        ]
    ));
    assert_eq!(
        query::walls(&board),
        vec![CellCoord::new(1, 0), CellCoord::new(1, 2)]
    );
    assert_eq!(
        board.lookup(CellCoord::new(1, 1)).map(|tile| tile.content_type()),
        Some(ContentType::Empty)
    );
}
