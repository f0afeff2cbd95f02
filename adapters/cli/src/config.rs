//! Board settings resolved from the optional manifest and command-line flags.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tile_defence_board::BoardConfig;
use tile_defence_core::CellCoord;

use crate::script::Action;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;
const DEFAULT_COLUMNS: u32 = 11;
const DEFAULT_ROWS: u32 = 11;
const DEFAULT_TILE_LENGTH: f32 = 1.0;

/// Board manifest read from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Manifest {
    version: u32,
    columns: Option<u32>,
    rows: Option<u32>,
    tile_length: Option<f32>,
    destination: Option<[u32; 2]>,
    show_paths: Option<bool>,
    #[serde(default)]
    actions: Vec<String>,
}

impl Manifest {
    /// Loads and validates the manifest stored at `path`.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read board manifest at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid board manifest at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(contents).context("failed to parse board manifest toml contents")?;
        if manifest.version != SUPPORTED_MANIFEST_VERSION {
            bail!(
                "unsupported board manifest version {}; expected {}",
                manifest.version,
                SUPPORTED_MANIFEST_VERSION
            );
        }
        Ok(manifest)
    }
}

/// Command-line overrides applied on top of the manifest.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Overrides {
    pub(crate) columns: Option<u32>,
    pub(crate) rows: Option<u32>,
    pub(crate) destination: Option<CellCoord>,
    pub(crate) show_paths: Option<bool>,
    pub(crate) actions: Vec<Action>,
}

/// Fully resolved settings for a single run.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) columns: u32,
    pub(crate) rows: u32,
    pub(crate) tile_length: f32,
    pub(crate) destination: Option<CellCoord>,
    pub(crate) show_paths: bool,
    pub(crate) actions: Vec<Action>,
}

impl Settings {
    /// Merges the manifest with flag overrides; flags win, and scripted
    /// actions from the command line run after the manifest's.
    pub(crate) fn resolve(manifest: Manifest, overrides: Overrides) -> Result<Self> {
        let mut actions = manifest
            .actions
            .iter()
            .map(|action| {
                action
                    .parse::<Action>()
                    .with_context(|| format!("invalid manifest action `{action}`"))
            })
            .collect::<Result<Vec<_>>>()?;
        actions.extend(overrides.actions);

        Ok(Self {
            columns: overrides
                .columns
                .or(manifest.columns)
                .unwrap_or(DEFAULT_COLUMNS),
            rows: overrides.rows.or(manifest.rows).unwrap_or(DEFAULT_ROWS),
            tile_length: manifest.tile_length.unwrap_or(DEFAULT_TILE_LENGTH),
            destination: overrides.destination.or_else(|| {
                manifest
                    .destination
                    .map(|[column, row]| CellCoord::new(column, row))
            }),
            show_paths: overrides
                .show_paths
                .or(manifest.show_paths)
                .unwrap_or(true),
            actions,
        })
    }

    /// Board configuration described by the settings.
    pub(crate) fn board_config(&self) -> BoardConfig {
        let config = BoardConfig::new(self.columns, self.rows).with_path_visibility(self.show_paths);
        match self.destination {
            Some(cell) => config.with_destination(cell),
            None => config,
        }
    }
}
