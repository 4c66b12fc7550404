//! Save slots
//!
//! Each slot is one JSON file in the save directory; slot 0 is the quick
//! slot used by F5/F9, slots 1 and up are the ones offered on the load and
//! save screens. A slot may have a PNG thumbnail next to its JSON file.
//!
//! The menus only see listings: `Vec<Option<SaveSlotEntry>>` laid out as a
//! grid, with `None` for an empty slot. The game payload inside a
//! [`SaveFile`] is opaque JSON.
//!
//! ```ignore
//! let saves = SaveManager::new(config.save_dir)?;
//! saves.save_game(3, &SaveFile::new(3, playtime, payload))?;
//!
//! // Quick slot + two rows of two, plus one empty row to save into
//! let listing = saves.list_save_slots(2, 1, 0)?;
//! ```

pub mod manager;
pub mod types;

pub use manager::{SaveManager, slot_listing_len};
pub use types::*;
