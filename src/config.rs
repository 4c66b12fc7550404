//! Menu configuration
//!
//! Loaded from a JSON file at startup. Every field has a default, so a
//! partial (or missing) file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Layout of the load/save slot grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotGrid {
    /// Slots per row
    pub columns: usize,

    /// Always-empty rows appended to the load menu
    pub load_empty_tail_rows: usize,

    /// Always-empty rows appended to the save menu, so there is room for a
    /// new save
    pub save_empty_tail_rows: usize,

    /// Minimum number of rows shown
    pub min_rows: usize,

    /// Highest regular slot number offered or read from disk
    pub max_slots: usize,
}

impl Default for SlotGrid {
    fn default() -> Self {
        SlotGrid {
            columns: 2,
            load_empty_tail_rows: 0,
            save_empty_tail_rows: 1,
            min_rows: 0,
            max_slots: crate::save::DEFAULT_MAX_SLOTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub save_dir: PathBuf,
    pub locale: String,
    /// Directory with `<locale>.json` overrides
    pub locale_dir: Option<PathBuf>,
    pub fullscreen: bool,
    pub slots: SlotGrid,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            save_dir: default_save_dir(),
            locale: crate::i18n::FALLBACK_LOCALE.to_string(),
            locale_dir: None,
            fullscreen: false,
            slots: SlotGrid::default(),
        }
    }
}

impl MenuConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Like `load_from_file`, but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

/// `~/.rpg_menu/saves`, or `./saves` without a home directory
pub fn default_save_dir() -> PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".rpg_menu/saves"))
        .unwrap_or_else(|| PathBuf::from("./saves"))
}
