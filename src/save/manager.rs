//! Save manager for slot-based save files
//!
//! This module provides the SaveManager struct which handles:
//! - Saving game state to a numbered slot
//! - Loading game state from a slot
//! - Enumerating slots as a fixed-width grid for the load/save menus

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SaveManager {
    save_directory: PathBuf,
    max_slots: usize,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            max_slots: DEFAULT_MAX_SLOTS,
        })
    }

    /// Caps regular slot numbers; save files above the cap are ignored
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.save_directory
    }

    pub fn slot_path(&self, slot: usize) -> PathBuf {
        self.save_directory.join(format!("slot_{}.json", slot))
    }

    /// Screenshot stored next to a slot's save file
    pub fn thumbnail_path(&self, slot: usize) -> PathBuf {
        self.save_directory.join(format!("slot_{}.png", slot))
    }

    /// Save the game state into a slot
    pub fn save_game(&self, slot: usize, save_file: &SaveFile) -> Result<PathBuf, SaveError> {
        let filepath = self.slot_path(slot);

        // Pretty JSON keeps save files readable for debugging
        let json = serde_json::to_string_pretty(save_file)?;
        fs::write(&filepath, json)?;

        log::info!("game saved to {}", filepath.display());

        Ok(filepath)
    }

    /// Load the save file from a slot
    pub fn load_game(&self, slot: usize) -> Result<SaveFile, SaveError> {
        let filepath = self.slot_path(slot);

        if !filepath.exists() {
            return Err(SaveError::SlotEmpty(slot));
        }

        let json = fs::read_to_string(&filepath)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        if save_file.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(save_file.version));
        }
        if save_file.metadata.save_slot != slot {
            return Err(SaveError::CorruptedData(format!(
                "file for slot {} claims slot {}",
                slot, save_file.metadata.save_slot
            )));
        }

        Ok(save_file)
    }

    pub fn save_exists(&self, slot: usize) -> bool {
        self.slot_path(slot).exists()
    }

    /// Listing entry for a slot, or `None` if the slot is empty
    pub fn slot_entry(&self, slot: usize) -> Option<SaveSlotEntry> {
        let modified = fs::metadata(self.slot_path(slot)).and_then(|m| m.modified()).ok()?;
        let thumbnail = self.thumbnail_path(slot);

        Some(SaveSlotEntry {
            index: slot,
            modified,
            thumbnail: thumbnail.exists().then_some(thumbnail),
        })
    }

    /// Indices of every slot up to the cap that has a save file, ascending
    pub fn populated_slots(&self) -> Result<Vec<usize>, SaveError> {
        let mut slots: Vec<usize> = fs::read_dir(&self.save_directory)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().and_then(parse_slot_filename))
            .filter(|&slot| {
                let in_range = slot <= self.max_slots;
                if !in_range {
                    log::warn!("ignoring save file for slot {} (max {})", slot, self.max_slots);
                }
                in_range
            })
            .collect();
        slots.sort_unstable();
        slots.dedup();
        Ok(slots)
    }

    /// Enumerates save slots as a grid
    ///
    /// Index 0 is the quick slot. Regular slots start at 1 and are padded so
    /// they fill whole rows of `cols`, with at least `min_rows` rows and
    /// `empty_tail_rows` extra rows at the end.
    pub fn list_save_slots(
        &self,
        cols: usize,
        empty_tail_rows: usize,
        min_rows: usize,
    ) -> Result<Vec<Option<SaveSlotEntry>>, SaveError> {
        let populated = self.populated_slots()?;
        let highest = populated.iter().copied().filter(|&s| s != QUICK_SLOT).max();
        let len = slot_listing_len(highest, cols, empty_tail_rows, min_rows, self.max_slots);

        Ok((0..len).map(|slot| self.slot_entry(slot)).collect())
    }
}

/// Length of a slot listing, including the quick slot
///
/// The regular part never exceeds `max_regular` slots.
pub fn slot_listing_len(
    highest_regular: Option<usize>,
    cols: usize,
    empty_tail_rows: usize,
    min_rows: usize,
    max_regular: usize,
) -> usize {
    let cols = cols.max(1);
    let used = highest_regular.unwrap_or(0).min(max_regular);
    let filled = used.div_ceil(cols).saturating_mul(cols);
    let regular = filled
        .max(min_rows.saturating_mul(cols))
        .saturating_add(empty_tail_rows.saturating_mul(cols));
    regular.min(max_regular) + 1
}

fn parse_slot_filename(name: &str) -> Option<usize> {
    name.strip_prefix("slot_")?.strip_suffix(".json")?.parse().ok()
}
