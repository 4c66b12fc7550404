#![allow(dead_code)]

use rpg_menu::EngineHost;
use rpg_menu::save::{DEFAULT_MAX_SLOTS, SaveSlotEntry, slot_listing_len};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

/// Everything the menus asked the host to do
#[derive(Debug, Default)]
pub struct Calls {
    pub exits: usize,
    pub loads: Vec<usize>,
    pub saves: Vec<usize>,
    pub new_games: usize,
    pub frozen: Vec<bool>,
    pub caught_keys: Vec<(bool, bool)>,
}

/// Host with a fixed set of populated slots
pub struct ScriptedHost {
    pub calls: Rc<RefCell<Calls>>,
    populated: Vec<usize>,
    fail_loads: bool,
    fullscreen: bool,
}

impl ScriptedHost {
    pub fn new(populated: &[usize]) -> (Self, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let host = ScriptedHost {
            calls: calls.clone(),
            populated: populated.to_vec(),
            fail_loads: false,
            fullscreen: false,
        };
        (host, calls)
    }

    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }
}

pub fn entry(index: usize) -> SaveSlotEntry {
    SaveSlotEntry {
        index,
        modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + index as u64 * 60),
        thumbnail: None::<PathBuf>,
    }
}

impl EngineHost for ScriptedHost {
    fn list_save_slots(&self, cols: usize, empty_tail_rows: usize, min_rows: usize) -> Vec<Option<SaveSlotEntry>> {
        let highest = self.populated.iter().copied().filter(|&s| s != 0).max();
        let len = slot_listing_len(highest, cols, empty_tail_rows, min_rows, DEFAULT_MAX_SLOTS);
        (0..len)
            .map(|slot| self.populated.contains(&slot).then(|| entry(slot)))
            .collect()
    }

    fn load_slot(&mut self, slot: usize) -> bool {
        self.calls.borrow_mut().loads.push(slot);
        !self.fail_loads && self.populated.contains(&slot)
    }

    fn save_slot(&mut self, slot: usize) -> bool {
        self.calls.borrow_mut().saves.push(slot);
        if !self.populated.contains(&slot) {
            self.populated.push(slot);
        }
        true
    }

    fn start_new_game(&mut self) {
        self.calls.borrow_mut().new_games += 1;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    fn exit(&mut self) {
        self.calls.borrow_mut().exits += 1;
    }

    fn freeze_world(&mut self, frozen: bool) {
        self.calls.borrow_mut().frozen.push(frozen);
    }

    fn catch_keys(&mut self, back: bool, menu: bool) {
        self.calls.borrow_mut().caught_keys.push((back, menu));
    }
}
