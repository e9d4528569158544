use std::{
    fs,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use ron::{extensions::Extensions, ser::PrettyConfig, Options};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Coord;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("cannot write settings: {0}")]
    Write(#[from] ron::Error),
}

/// Defaults used when the command line doesn't say otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    /// Used for deterministic generation.
    pub seed: Option<u64>,
    pub start: Coord,
    /// Bottom-right cell when unset.
    pub goal: Option<Coord>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rows: 5,
            cols: 5,
            seed: None,
            start: Coord::ZERO,
            goal: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dfsmaze")
            .join("settings.ron")
    }

    fn options() -> Options {
        Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(source)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Reads settings from `path`, falling back to defaults if the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_ron(&fs::read_to_string(path)?)
    }

    /// Overwrites `path` with the default settings.
    pub fn reset_config(path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::default().to_ron()?)?;
        Ok(())
    }

    /// Goal cell for a `rows x cols` maze.
    pub fn goal_for(&self, rows: usize, cols: usize) -> Coord {
        self.goal
            .unwrap_or(Coord(rows as i32 - 1, cols as i32 - 1))
    }
}
