#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that builds a Tile Defence board, replays scripted
//! player actions against it, and prints the resulting path field.

mod config;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tile_defence_board::{self as board, query, Board, ContentPool};
use tile_defence_core::{CellCoord, Event};
use tile_defence_rendering::{TextFrame, TileGridPresentation};
use tile_defence_system_builder::Builder;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Manifest, Overrides, Settings};
use crate::script::{parse_cell, Action};

/// Command-line arguments accepted by the Tile Defence CLI.
#[derive(Debug, Parser)]
#[command(name = "tile-defence", about = "Tile Defence path field explorer")]
struct CliArgs {
    /// Optional TOML manifest describing the board and a scripted action list.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of tile columns.
    #[arg(long)]
    columns: Option<u32>,
    /// Number of tile rows.
    #[arg(long)]
    rows: Option<u32>,
    /// Initial destination written as `X,Y`.
    #[arg(long, value_parser = parse_cell)]
    destination: Option<CellCoord>,
    /// Show path indicators even when the manifest hides them.
    #[arg(long, conflicts_with = "hide_paths")]
    show_paths: bool,
    /// Hide path indicators in the printed frame.
    #[arg(long)]
    hide_paths: bool,
    /// Also print the distance of every tile.
    #[arg(long)]
    distances: bool,
    /// Actions replayed in order: `wall:X,Y`, `dest:X,Y`, `click:X,Z`, `alt-click:X,Z`, `paths`.
    actions: Vec<Action>,
}

/// Entry point for the Tile Defence command-line interface.
fn main() -> Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let manifest = match &args.config {
        Some(path) => Manifest::from_path(path)?,
        None => Manifest::default(),
    };
    let settings = Settings::resolve(
        manifest,
        Overrides {
            columns: args.columns,
            rows: args.rows,
            destination: args.destination,
            show_paths: match (args.show_paths, args.hide_paths) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            actions: args.actions,
        },
    )?;

    let mut board = Board::new(settings.board_config(), ContentPool::new())
        .context("failed to build the board")?;
    let grid = TileGridPresentation::new(settings.columns, settings.rows, settings.tile_length)
        .context("failed to lay out the board for presentation")?;
    info!(
        columns = settings.columns,
        rows = settings.rows,
        width = grid.width(),
        depth = grid.height(),
        destinations = ?query::destinations(&board),
        "board ready"
    );

    run_script(&mut board, &grid, &settings.actions);

    let view = query::board_view(&board);
    print!("{}", TextFrame.path_field(&view));
    if args.distances {
        println!();
        print!("{}", TextFrame.distances(&view));
    }
    Ok(())
}

fn run_script(board: &mut Board, grid: &TileGridPresentation, actions: &[Action]) {
    let mut builder = Builder::with_path_visibility(board.paths_visible());
    let mut events = Vec::new();

    for action in actions {
        let input = action.to_input(grid);
        if matches!(action, Action::Click { .. }) && input.cursor_cell.is_none() {
            warn!(?action, "click missed the board");
        }

        let mut commands = Vec::new();
        builder.handle(&events, input, &mut commands);
        events.clear();
        for command in commands {
            board::apply(board, command, &mut events);
        }
        events.iter().for_each(log_event);
    }
}

fn log_event(event: &Event) {
    match event {
        Event::PlacementRejected {
            cell,
            content,
            reason,
        } => warn!(%cell, ?content, ?reason, "placement rejected"),
        other => info!(event = ?other, "board updated"),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
