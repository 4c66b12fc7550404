use super::column_window;
use crate::gui::GuiContext;
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};

/// Shown when the player dies: load a save, go to the title, or quit
pub struct GameOverMenu;

impl MenuStateHandler for GameOverMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::GameOver
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ChangeState(MenuStateId::Title)
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let entries = vec![
            ("gameovermenu.load", Action::ChangeState(MenuStateId::Load)),
            ("gameovermenu.return", Action::ChangeState(MenuStateId::Title)),
            ("gameovermenu.exit", Action::Exit),
        ];
        if let Some(first) = column_window(menu, gui, "gameovermenu.title", entries) {
            gui.focus(first);
        }
    }
}
