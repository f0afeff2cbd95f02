//! Scripted player actions replayed against the board.

use std::str::FromStr;

use glam::Vec3;
use thiserror::Error;
use tile_defence_core::CellCoord;
use tile_defence_rendering::TileGridPresentation;
use tile_defence_system_builder::BuilderInput;

/// Single player action expressed as `verb` or `verb:arguments`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    /// `wall:X,Y` toggles a wall on the addressed tile.
    Wall(CellCoord),
    /// `dest:X,Y` toggles a destination on the addressed tile.
    Destination(CellCoord),
    /// `click:X,Z` toggles a wall under a ground-plane hit point.
    Click {
        /// World-space X coordinate of the hit.
        x: f32,
        /// World-space Z coordinate of the hit.
        z: f32,
        /// Whether the alternative binding was held, toggling a destination.
        alternative: bool,
    },
    /// `paths` flips path indicator visibility.
    TogglePaths,
}

impl Action {
    /// Translates the action into the builder input of a single frame.
    pub(crate) fn to_input(self, grid: &TileGridPresentation) -> BuilderInput {
        match self {
            Self::Wall(cell) => BuilderInput::new(true, false, false, Some(cell)),
            Self::Destination(cell) => BuilderInput::new(false, true, false, Some(cell)),
            Self::Click { x, z, alternative } => {
                let cursor_cell = grid.pick_cell(Vec3::new(x, 0.0, z));
                BuilderInput::new(!alternative, alternative, false, cursor_cell)
            }
            Self::TogglePaths => BuilderInput::new(false, false, true, None),
        }
    }
}

impl FromStr for Action {
    type Err = ScriptError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (verb, arguments) = match trimmed.split_once(':') {
            Some((verb, arguments)) => (verb, Some(arguments)),
            None => (trimmed, None),
        };

        match (verb, arguments) {
            ("paths", None) => Ok(Self::TogglePaths),
            ("wall", Some(arguments)) => parse_cell(arguments).map(Self::Wall),
            ("dest", Some(arguments)) => parse_cell(arguments).map(Self::Destination),
            ("click" | "alt-click", Some(arguments)) => {
                let (x, z) = parse_pair::<f32>(arguments)?;
                Ok(Self::Click {
                    x,
                    z,
                    alternative: verb == "alt-click",
                })
            }
            ("wall" | "dest" | "click" | "alt-click", None) => {
                Err(ScriptError::MissingArguments(verb.to_owned()))
            }
            _ => Err(ScriptError::UnknownAction(trimmed.to_owned())),
        }
    }
}

/// Parses a cell written as `X,Y`.
pub(crate) fn parse_cell(value: &str) -> Result<CellCoord, ScriptError> {
    let (column, row) = parse_pair::<u32>(value)?;
    Ok(CellCoord::new(column, row))
}

fn parse_pair<T: FromStr>(value: &str) -> Result<(T, T), ScriptError> {
    let invalid = || ScriptError::InvalidPair(value.to_owned());
    let (first, second) = value.split_once(',').ok_or_else(invalid)?;
    let first = first.trim().parse().map_err(|_| invalid())?;
    let second = second.trim().parse().map_err(|_| invalid())?;
    Ok((first, second))
}

/// Errors that can occur while parsing scripted actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ScriptError {
    /// The verb is not recognised.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    /// The verb requires coordinates that were not supplied.
    #[error("action '{0}' requires coordinates")]
    MissingArguments(String),
    /// The coordinates could not be parsed.
    #[error("could not parse coordinate pair '{0}'")]
    InvalidPair(String),
}
