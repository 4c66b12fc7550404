//! Load and save screens
//!
//! Both list the host's save slots as a grid: the quick slot on top next to
//! the cancel button, regular slots below in rows, highest index first. The
//! listing is fetched fresh on every build.
//!
//! Populated slots are buttons labelled with their last-modified time and
//! show the slot's thumbnail if it has one. Empty slots are disabled
//! placeholders on the load screen and plain buttons on the save screen,
//! where writing into an empty slot is the point.

use crate::gui::{GuiContext, Widget, Window};
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};
use crate::save::{QUICK_SLOT, SaveSlotEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMode {
    Load,
    Save,
}

impl SlotMode {
    fn prefix(self) -> &'static str {
        match self {
            SlotMode::Load => "loadmenu",
            SlotMode::Save => "savemenu",
        }
    }

    /// "Load" / "Save" in front of a slot number
    fn verb(self) -> &'static str {
        match self {
            SlotMode::Load => "load",
            SlotMode::Save => "save",
        }
    }

    fn key(self, name: &str) -> String {
        format!("{}.{}", self.prefix(), name)
    }

    fn action(self, slot: usize, failure: String) -> Action {
        match self {
            SlotMode::Load => Action::LoadSlot { slot, failure },
            SlotMode::Save => Action::SaveSlot { slot, failure },
        }
    }
}

pub struct SlotMenu {
    mode: SlotMode,
}

impl SlotMenu {
    pub fn new(mode: SlotMode) -> Self {
        SlotMenu { mode }
    }

    fn slot_widget(
        &self,
        menu: &MenuService,
        gui: &mut GuiContext,
        text: String,
        slot: usize,
        entry: Option<&SaveSlotEntry>,
    ) -> Widget {
        let failure = match self.mode {
            SlotMode::Load => menu.text(gui, "loadmenu.loadfailed"),
            SlotMode::Save => menu.text(gui, "savemenu.savefailed"),
        };

        let Some(entry) = entry else {
            let label = format!("{} - {}", text, menu.text(gui, &self.mode.key("empty")));
            return match self.mode {
                SlotMode::Load => gui.placeholder(label),
                SlotMode::Save => gui.button(label, self.mode.action(slot, failure)),
            };
        };

        let label = format!("{} - {}", text, entry.timestamp_label());
        let action = self.mode.action(slot, failure);
        let widget = match &entry.thumbnail {
            Some(thumbnail) => gui.thumbnail_button(label, action, thumbnail.clone()),
            None => gui.button(label, action),
        };
        gui.focus_if_unset(widget.id);
        widget
    }
}

impl MenuStateHandler for SlotMenu {
    fn state_id(&self) -> MenuStateId {
        match self.mode {
            SlotMode::Load => MenuStateId::Load,
            SlotMode::Save => MenuStateId::Save,
        }
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ResumeLast
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let grid = menu.slot_grid();
        let tail_rows = match self.mode {
            SlotMode::Load => grid.load_empty_tail_rows,
            SlotMode::Save => grid.save_empty_tail_rows,
        };
        let slots = menu
            .host()
            .list_save_slots(grid.columns, tail_rows, grid.min_rows);
        let cols = grid.columns.max(1);

        let mut window = Window::new(menu.text(gui, &self.mode.key("title"))).with_size(700, 480);

        let quick_text = match self.mode {
            SlotMode::Load => menu.text(gui, "loadmenu.quickload"),
            SlotMode::Save => menu.text(gui, "savemenu.quicksave"),
        };
        let quick_entry = slots.first().and_then(Option::as_ref);
        let quick = self.slot_widget(menu, gui, quick_text, QUICK_SLOT, quick_entry);
        window.row();
        window.add(quick.with_colspan(u8::try_from(cols.max(2)).unwrap_or(u8::MAX)));

        let cancel_text = menu.text(gui, &self.mode.key("cancel"));
        let cancel = window.add(gui.button(cancel_text, Action::ResumeLast));

        let slot_text = menu.text(gui, &self.mode.key(self.mode.verb()));
        let regular: Vec<usize> = (1..slots.len()).rev().collect();
        for row in regular.chunks(cols) {
            window.row();
            for &slot in row.iter().rev() {
                let text = format!("{} {}", slot_text, slot);
                let widget = self.slot_widget(menu, gui, text, slot, slots[slot].as_ref());
                window.add(widget);
            }
        }

        let index = menu.add_window(window);
        menu.center(index);
        gui.focus_if_unset(cancel);
    }
}
