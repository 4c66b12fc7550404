use super::column_window;
use crate::gui::GuiContext;
use crate::input_system::Key;
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};

/// Pause overlay: resume or return to the title screen
pub struct PauseMenu;

impl MenuStateHandler for PauseMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::Pause
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ChangeState(MenuStateId::Idle)
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let entries = vec![
            ("pausemenu.resume", Action::ChangeState(MenuStateId::Idle)),
            ("pausemenu.return", Action::ChangeState(MenuStateId::Title)),
        ];
        if let Some(resume) = column_window(menu, gui, "pausemenu.title", entries) {
            gui.focus(resume);
        }
    }

    fn process_input(&self, key: Key, menu: &mut MenuService) -> bool {
        if key == Key::P || key.is_cancel() {
            return menu.apply_escape_policy(self.escape_policy());
        }
        false
    }
}
