//! Title screen
//!
//! Continue (loads the newest save, if there is one), load game, new game,
//! fullscreen toggle, exit. ESCAPE exits: there is nothing to go back to.

use super::{column_window, fullscreen_key};
use crate::gui::GuiContext;
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};

pub struct TitleMenu;

impl MenuStateHandler for TitleMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::Title
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ExitGame
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let grid = menu.slot_grid();
        let newest = menu
            .host()
            .list_save_slots(grid.columns, 0, 0)
            .into_iter()
            .flatten()
            .max_by_key(|entry| entry.modified);

        let mut entries = Vec::new();
        if let Some(newest) = newest {
            entries.push((
                "titlemenu.continue",
                Action::LoadSlot {
                    slot: newest.index,
                    failure: menu.text(gui, "loadmenu.loadfailed"),
                },
            ));
        }
        let fullscreen = fullscreen_key(menu, "titlemenu");
        entries.extend([
            ("titlemenu.load", Action::ChangeState(MenuStateId::Load)),
            ("titlemenu.newgame", Action::StartNewGame),
            (fullscreen.as_str(), Action::ToggleFullscreen),
            ("titlemenu.exit", Action::Exit),
        ]);

        if let Some(first) = column_window(menu, gui, "titlemenu.title", entries) {
            gui.focus(first);
        }
    }
}
