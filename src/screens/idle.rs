//! Gameplay state
//!
//! No windows. Listens for the keys that open a menu or quick save/load;
//! every other key falls through to the game world.

use crate::gui::GuiContext;
use crate::input_system::Key;
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};
use crate::i18n::ENGINE_MENU_TEXT;
use crate::save::QUICK_SLOT;

pub struct IdleMenu;

impl MenuStateHandler for IdleMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::Idle
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ChangeState(MenuStateId::Game)
    }

    fn create_gui(&self, _menu: &mut MenuService, _gui: &mut GuiContext) {}

    fn process_input(&self, key: Key, menu: &mut MenuService) -> bool {
        match key {
            Key::P => menu.perform(&Action::ChangeState(MenuStateId::Pause)),
            Key::F5 => {
                let text = if menu.host_mut().save_slot(QUICK_SLOT) {
                    menu.localized_text(ENGINE_MENU_TEXT, "idlemenu.quicksaved")
                } else {
                    menu.localized_text(ENGINE_MENU_TEXT, "savemenu.savefailed")
                };
                menu.show_message(text);
                true
            }
            Key::F9 => {
                let failure = menu.localized_text(ENGINE_MENU_TEXT, "loadmenu.loadfailed");
                menu.perform(&Action::LoadSlot {
                    slot: QUICK_SLOT,
                    failure,
                });
                true
            }
            key if key.is_cancel() => menu.apply_escape_policy(self.escape_policy()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localization;
    use crate::screens::PauseMenu;
    use crate::testing::{RecordingHost, SharedLog};

    fn idle(host: RecordingHost) -> MenuService {
        let mut menu = MenuService::new(Box::new(host), Localization::builtin());
        menu.put_state_handler(IdleMenu);
        menu.put_state_handler(PauseMenu);
        menu.change_state(MenuStateId::Idle).unwrap();
        menu
    }

    fn recording() -> (RecordingHost, SharedLog) {
        RecordingHost::new(Vec::new())
    }

    #[test]
    fn test_movement_keys_fall_through() {
        let (host, _) = recording();
        let mut menu = idle(host);
        assert!(!menu.dispatch_input(Key::Up));
        assert!(!menu.dispatch_input(Key::Other(87)));
        assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    }

    #[test]
    fn test_p_pauses_and_p_resumes() {
        let (host, log) = recording();
        let mut menu = idle(host);
        assert!(menu.dispatch_input(Key::P));
        assert_eq!(menu.current_state(), Some(MenuStateId::Pause));
        assert_eq!(log.borrow().frozen, Some(true));

        assert!(menu.dispatch_input(Key::P));
        assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
        assert_eq!(log.borrow().frozen, Some(false));
    }

    #[test]
    fn test_escape_without_game_menu_not_consumed() {
        let (host, _) = recording();
        let mut menu = idle(host);
        assert!(!menu.dispatch_input(Key::Escape));
        assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    }

    #[test]
    fn test_quick_save_reports_result() {
        let (host, log) = recording();
        let mut menu = idle(host);
        assert!(menu.dispatch_input(Key::F5));
        assert_eq!(log.borrow().saves, vec![QUICK_SLOT]);
        assert_eq!(menu.current_message(), Some("Game saved"));

        let (host, _) = recording();
        let mut menu = idle(host.failing_saves());
        menu.dispatch_input(Key::F5);
        assert_eq!(menu.current_message(), Some("Saving failed!"));
    }

    #[test]
    fn test_failed_quick_load_stays_in_game() {
        let (host, log) = recording();
        let mut menu = idle(host.failing_loads());
        assert!(menu.dispatch_input(Key::F9));
        assert_eq!(log.borrow().loads, vec![QUICK_SLOT]);
        assert_eq!(menu.message_count(), 1);
        assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    }
}
