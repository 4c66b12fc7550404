use crate::gui::{GuiContext, Window};
use crate::menu::{Action, EscapePolicy, MenuService, MenuStateHandler, MenuStateId};

/// One button per available locale, each named in its own language
pub struct ChangeLangMenu;

impl MenuStateHandler for ChangeLangMenu {
    fn state_id(&self) -> MenuStateId {
        MenuStateId::ChangeLang
    }

    fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::ResumeLast
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        let mut window = Window::new(menu.text(gui, "langmenu.title"));
        let active = menu.i18n().locale().to_string();

        for locale in menu.i18n().available_locales() {
            let name = menu.i18n().language_name(&locale);
            let is_active = locale == active;
            window.row();
            let id = window.add(gui.button(name, Action::ChangeLocale(locale)));
            if is_active {
                gui.focus(id);
            }
        }

        let cancel_text = menu.text(gui, "langmenu.cancel");
        window.row();
        let cancel = window.add(gui.button(cancel_text, Action::ResumeLast));
        gui.focus_if_unset(cancel);

        let index = menu.add_window(window);
        menu.center(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localization;
    use crate::testing::RecordingHost;

    #[test]
    fn test_lists_locales_and_focuses_active() {
        let (host, _) = RecordingHost::new(Vec::new());
        let mut i18n = Localization::builtin();
        i18n.set_locale("de");
        let mut menu = MenuService::new(Box::new(host), i18n);
        menu.put_state_handler(ChangeLangMenu);
        menu.change_state(MenuStateId::ChangeLang).unwrap();

        let window = menu.stage().top().unwrap();
        let labels: Vec<&str> = window.widgets().map(|w| w.text()).collect();
        assert_eq!(labels, vec!["Deutsch", "English", "Abbrechen"]);
        assert_eq!(window.title, "Sprache");

        let focused = menu.stage().focus().unwrap();
        assert_eq!(
            menu.stage().find(focused).unwrap().action(),
            Some(&Action::ChangeLocale("de".to_string()))
        );
    }
}
