//! In-game menu
//!
//! Opened from gameplay with ESCAPE. Gives access to the save, load, and
//! language screens, which open on top of it and return here on cancel.

use super::{column_window, fullscreen_key};
use crate::gui::GuiContext;
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};

pub struct GameMenu;

impl MenuStateHandler for GameMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::Game
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ResumeLast
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let fullscreen = fullscreen_key(menu, "gamemenu");
        let entries = vec![
            ("gamemenu.resume", Action::ChangeState(MenuStateId::Idle)),
            ("gamemenu.save", Action::ChangeState(MenuStateId::Save)),
            ("gamemenu.load", Action::ChangeState(MenuStateId::Load)),
            ("gamemenu.language", Action::ChangeState(MenuStateId::ChangeLang)),
            (fullscreen.as_str(), Action::ToggleFullscreen),
            ("gamemenu.return", Action::ChangeState(MenuStateId::Title)),
        ];
        if let Some(first) = column_window(menu, gui, "gamemenu.title", entries) {
            gui.focus(first);
        }
    }
}
