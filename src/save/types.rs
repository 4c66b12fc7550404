//! Save data types
//!
//! Save files are JSON documents, one per slot. The game's own state is
//! opaque to the menu layer and travels as a JSON payload.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;

/// Slot reserved for quick save / quick load
pub const QUICK_SLOT: usize = 0;

/// Highest regular slot number unless configured otherwise
pub const DEFAULT_MAX_SLOTS: usize = 99;

/// Current save file version
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// The root save file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
    pub payload: serde_json::Value,
}

impl SaveFile {
    pub fn new(slot: usize, playtime_seconds: u64, payload: serde_json::Value) -> Self {
        SaveFile {
            version: CURRENT_SAVE_VERSION,
            timestamp: SystemTime::now(),
            metadata: SaveMetadata {
                game_version: env!("CARGO_PKG_VERSION").to_string(),
                playtime_seconds,
                save_type: if slot == QUICK_SLOT {
                    SaveType::Quick
                } else {
                    SaveType::Manual
                },
                save_slot: slot,
            },
            payload,
        }
    }
}

/// Metadata about the save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub game_version: String,
    pub playtime_seconds: u64,
    pub save_type: SaveType,
    pub save_slot: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Manual,
    Quick,
}

/// One populated position in a save slot listing
///
/// Listings are `Vec<Option<SaveSlotEntry>>`; `None` marks an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlotEntry {
    pub index: usize,
    pub modified: SystemTime,
    pub thumbnail: Option<PathBuf>,
}

impl SaveSlotEntry {
    /// Last-modified time as shown on slot buttons
    pub fn timestamp_label(&self) -> String {
        let local: DateTime<Local> = self.modified.into();
        local.format("%b %e, %Y %H:%M").to_string()
    }
}

/// Error types for save/load operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid save version: {0}")]
    InvalidVersion(u32),

    #[error("Save slot {0} is empty")]
    SlotEmpty(usize),

    #[error("Corrupted save data: {0}")]
    CorruptedData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_slot_save_type() {
        assert_eq!(SaveFile::new(QUICK_SLOT, 0, serde_json::Value::Null).metadata.save_type, SaveType::Quick);
        assert_eq!(SaveFile::new(3, 0, serde_json::Value::Null).metadata.save_type, SaveType::Manual);
    }

    #[test]
    fn test_timestamp_label_is_not_empty() {
        let entry = SaveSlotEntry {
            index: 1,
            modified: SystemTime::now(),
            thumbnail: None,
        };
        let label = entry.timestamp_label();
        assert!(label.contains(':'));
    }
}
