#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure builder system responsible for emitting wall, destination, and path
//! visibility commands.

use tile_defence_core::{CellCoord, Command, Event};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuilderInput {
    /// Indicates whether the player requested a wall toggle on this frame.
    pub toggle_wall: bool,
    /// Indicates whether the player requested a destination toggle on this frame.
    ///
    /// Takes precedence over `toggle_wall` when both are set, mirroring the
    /// modifier-click binding.
    pub toggle_destination: bool,
    /// Indicates whether the player asked to flip path visibility on this frame.
    pub toggle_paths: bool,
    /// Cell currently hovered by the cursor, if it lies on the board.
    pub cursor_cell: Option<CellCoord>,
}

impl BuilderInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(
        toggle_wall: bool,
        toggle_destination: bool,
        toggle_paths: bool,
        cursor_cell: Option<CellCoord>,
    ) -> Self {
        Self {
            toggle_wall,
            toggle_destination,
            toggle_paths,
            cursor_cell,
        }
    }
}

/// Builder system that translates input into placement commands.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    paths_visible: bool,
}

impl Builder {
    /// Creates a new builder system that assumes path indicators start hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths_visible: false,
        }
    }

    /// Creates a builder that starts from the provided path visibility.
    #[must_use]
    pub const fn with_path_visibility(visible: bool) -> Self {
        Self {
            paths_visible: visible,
        }
    }

    /// Last path visibility observed through board events.
    #[must_use]
    pub const fn paths_visible(&self) -> bool {
        self.paths_visible
    }

    /// Consumes board events and frame input to emit builder commands.
    pub fn handle(&mut self, events: &[Event], input: BuilderInput, out: &mut Vec<Command>) {
        for event in events {
            if let Event::PathVisibilityChanged { visible } = event {
                self.paths_visible = *visible;
            }
        }

        if input.toggle_paths {
            out.push(Command::SetPathVisibility {
                visible: !self.paths_visible,
            });
        }

        let Some(cell) = input.cursor_cell else {
            return;
        };

        if input.toggle_destination {
            out.push(Command::ToggleDestination { cell });
        } else if input.toggle_wall {
            out.push(Command::ToggleWall { cell });
        }
    }
}
