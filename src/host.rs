//! Engine services the menus call into
//!
//! The menu layer never touches persistence, the window, or the game
//! simulation directly. It goes through [`EngineHost`], which the game
//! implements. [`DesktopHost`] is the implementation used by the desktop
//! front end, backed by a [`SaveManager`].

use crate::save::{SaveFile, SaveManager, SaveSlotEntry};

pub trait EngineHost {
    /// Save slots laid out as a grid; `None` marks an empty slot
    fn list_save_slots(
        &self,
        cols: usize,
        empty_tail_rows: usize,
        min_rows: usize,
    ) -> Vec<Option<SaveSlotEntry>>;

    /// Restores the game from a slot; false on any failure
    fn load_slot(&mut self, slot: usize) -> bool;

    /// Writes the running game into a slot; false on any failure
    fn save_slot(&mut self, slot: usize) -> bool;

    fn start_new_game(&mut self);

    fn is_fullscreen(&self) -> bool;

    fn toggle_fullscreen(&mut self);

    /// Requests process termination
    fn exit(&mut self);

    /// Pauses or resumes the game simulation
    fn freeze_world(&mut self, _frozen: bool) {}

    /// Whether the platform BACK / MENU keys should be swallowed
    fn catch_keys(&mut self, _back: bool, _menu: bool) {}
}

/// State of the game the menus save and restore
///
/// The payload is opaque to the menu layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSession {
    pub playtime_seconds: u64,
    pub payload: serde_json::Value,
}

pub struct DesktopHost {
    saves: SaveManager,
    session: GameSession,
    fullscreen: bool,
    world_frozen: bool,
    exit_requested: bool,
}

impl DesktopHost {
    pub fn new(saves: SaveManager, fullscreen: bool) -> Self {
        DesktopHost {
            saves,
            session: GameSession::default(),
            fullscreen,
            world_frozen: false,
            exit_requested: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn is_world_frozen(&self) -> bool {
        self.world_frozen
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl EngineHost for DesktopHost {
    fn list_save_slots(
        &self,
        cols: usize,
        empty_tail_rows: usize,
        min_rows: usize,
    ) -> Vec<Option<SaveSlotEntry>> {
        match self.saves.list_save_slots(cols, empty_tail_rows, min_rows) {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("failed to list save slots: {}", e);
                Vec::new()
            }
        }
    }

    fn load_slot(&mut self, slot: usize) -> bool {
        match self.saves.load_game(slot) {
            Ok(save_file) => {
                self.session = GameSession {
                    playtime_seconds: save_file.metadata.playtime_seconds,
                    payload: save_file.payload,
                };
                log::info!("loaded slot {}", slot);
                true
            }
            Err(e) => {
                log::warn!("failed to load slot {}: {}", slot, e);
                false
            }
        }
    }

    fn save_slot(&mut self, slot: usize) -> bool {
        let save_file = SaveFile::new(slot, self.session.playtime_seconds, self.session.payload.clone());
        match self.saves.save_game(slot, &save_file) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("failed to save slot {}: {}", slot, e);
                false
            }
        }
    }

    fn start_new_game(&mut self) {
        log::info!("starting new game");
        self.session = GameSession::default();
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    fn exit(&mut self) {
        self.exit_requested = true;
    }

    fn freeze_world(&mut self, frozen: bool) {
        self.world_frozen = frozen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> (tempfile::TempDir, DesktopHost) {
        let dir = tempfile::tempdir().unwrap();
        let saves = SaveManager::new(dir.path()).unwrap();
        (dir, DesktopHost::new(saves, false))
    }

    #[test]
    fn test_save_then_load_restores_session() {
        let (_dir, mut host) = host();
        host.session_mut().playtime_seconds = 90;
        host.session_mut().payload = serde_json::json!({ "map": "cave" });
        assert!(host.save_slot(3));

        host.start_new_game();
        assert_eq!(host.session(), &GameSession::default());

        assert!(host.load_slot(3));
        assert_eq!(host.session().playtime_seconds, 90);
        assert_eq!(host.session().payload["map"], "cave");
    }

    #[test]
    fn test_loading_empty_slot_fails() {
        let (_dir, mut host) = host();
        assert!(!host.load_slot(1));
    }

    #[test]
    fn test_listing_reflects_saves() {
        let (_dir, mut host) = host();
        assert!(host.save_slot(2));

        let listing = host.list_save_slots(2, 0, 0);
        assert_eq!(listing.len(), 3);
        assert!(listing[2].is_some());
    }

    #[test]
    fn test_fullscreen_and_exit_flags() {
        let (_dir, mut host) = host();
        host.toggle_fullscreen();
        assert!(host.is_fullscreen());
        host.freeze_world(true);
        assert!(host.is_world_frozen());
        host.exit();
        assert!(host.exit_requested());
    }
}
