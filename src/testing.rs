//! Recording host for unit tests

use crate::host::EngineHost;
use crate::save::SaveSlotEntry;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct HostLog {
    pub exits: usize,
    pub loads: Vec<usize>,
    pub saves: Vec<usize>,
    pub new_games: usize,
    pub fullscreen_toggles: usize,
    pub frozen: Option<bool>,
    pub listings: Vec<(usize, usize, usize)>,
}

pub type SharedLog = Rc<RefCell<HostLog>>;

pub struct RecordingHost {
    log: SharedLog,
    slots: Vec<Option<SaveSlotEntry>>,
    load_ok: bool,
    save_ok: bool,
    fullscreen: bool,
}

impl RecordingHost {
    pub fn new(slots: Vec<Option<SaveSlotEntry>>) -> (Self, SharedLog) {
        let log = SharedLog::default();
        let host = RecordingHost {
            log: log.clone(),
            slots,
            load_ok: true,
            save_ok: true,
            fullscreen: false,
        };
        (host, log)
    }

    pub fn failing_loads(mut self) -> Self {
        self.load_ok = false;
        self
    }

    pub fn failing_saves(mut self) -> Self {
        self.save_ok = false;
        self
    }
}

impl EngineHost for RecordingHost {
    fn list_save_slots(&self, cols: usize, empty_tail_rows: usize, min_rows: usize) -> Vec<Option<SaveSlotEntry>> {
        self.log.borrow_mut().listings.push((cols, empty_tail_rows, min_rows));
        self.slots.clone()
    }

    fn load_slot(&mut self, slot: usize) -> bool {
        self.log.borrow_mut().loads.push(slot);
        self.load_ok
    }

    fn save_slot(&mut self, slot: usize) -> bool {
        self.log.borrow_mut().saves.push(slot);
        self.save_ok
    }

    fn start_new_game(&mut self) {
        self.log.borrow_mut().new_games += 1;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.log.borrow_mut().fullscreen_toggles += 1;
    }

    fn exit(&mut self) {
        self.log.borrow_mut().exits += 1;
    }

    fn freeze_world(&mut self, frozen: bool) {
        self.log.borrow_mut().frozen = Some(frozen);
    }
}
