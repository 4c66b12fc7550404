mod common;

use common::ScriptedHost;
use rpg_menu::gui::WidgetId;
use rpg_menu::menu::FnHandler;
use rpg_menu::{Action, Key, Localization, MenuError, MenuService, MenuStateId, screens};

fn standard_menu(host: ScriptedHost) -> MenuService {
    let mut menu = MenuService::new(Box::new(host), Localization::builtin());
    screens::install_standard_menus(&mut menu).unwrap();
    menu
}

/// Widget in the top window whose text starts with `prefix`
fn find_widget(menu: &MenuService, prefix: &str) -> WidgetId {
    menu.stage()
        .top()
        .and_then(|window| window.widgets().find(|w| w.text().starts_with(prefix)))
        .map(|w| w.id)
        .unwrap_or_else(|| panic!("no widget starting with '{}'", prefix))
}

fn top_rows(menu: &MenuService) -> Vec<Vec<String>> {
    menu.stage()
        .top()
        .unwrap()
        .rows
        .iter()
        .map(|row| row.iter().map(|w| w.text().to_string()).collect())
        .collect()
}

#[test]
fn test_install_opens_title() {
    let (host, calls) = ScriptedHost::new(&[]);
    let menu = standard_menu(host);

    assert_eq!(menu.current_state(), Some(MenuStateId::Title));
    assert!(menu.history().is_empty());
    assert!(menu.flags().clear_the_screen);
    assert_eq!(calls.borrow().frozen, vec![true]);
    for id in MenuStateId::ALL {
        assert!(menu.is_registered(id), "{} not registered", id);
    }
}

#[test]
fn test_key_capture_follows_state_flags() {
    let (host, calls) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);
    // TITLE leaves BACK and MENU to the platform
    assert_eq!(calls.borrow().caught_keys, vec![(false, false)]);

    menu.change_state(MenuStateId::Idle).unwrap();
    menu.change_state(MenuStateId::Pause).unwrap();
    menu.change_state(MenuStateId::Load).unwrap();
    assert_eq!(
        calls.borrow().caught_keys,
        vec![(false, false), (false, true), (true, true), (true, true)]
    );
}

#[test]
fn test_title_escape_exits_exactly_once() {
    let (host, calls) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);

    assert!(menu.dispatch_input(Key::Escape));
    assert!(menu.exit_requested());
    assert_eq!(calls.borrow().exits, 1);

    // Nothing is accepted after the exit request
    assert!(!menu.dispatch_input(Key::Escape));
    assert!(!menu.dispatch_input(Key::Enter));
    assert_eq!(menu.change_state(MenuStateId::Idle), Err(MenuError::ExitRequested));
    assert_eq!(calls.borrow().exits, 1);
    assert_eq!(menu.current_state(), Some(MenuStateId::Title));
}

#[test]
fn test_unregistered_state_is_rejected() {
    let (host, _) = ScriptedHost::new(&[]);
    let mut menu = MenuService::new(Box::new(host), Localization::builtin());
    menu.put_state_handler(FnHandler::empty(MenuStateId::Title));
    menu.change_state(MenuStateId::Title).unwrap();

    assert_eq!(
        menu.change_state(MenuStateId::Pause),
        Err(MenuError::UnknownState(MenuStateId::Pause))
    );
    assert_eq!(menu.current_state(), Some(MenuStateId::Title));
    assert!(menu.history().is_empty());
    assert_eq!(
        menu.ensure_registered(&MenuStateId::ALL),
        Err(MenuError::MissingHandler(MenuStateId::GameOver))
    );
}

#[test]
fn test_changes_then_resumes_return_to_start() {
    let (host, _) = ScriptedHost::new(&[1]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Game).unwrap();
    let start_history = menu.history().to_vec();

    let path = [MenuStateId::Load, MenuStateId::Save, MenuStateId::ChangeLang];
    for id in path {
        menu.change_state(id).unwrap();
    }
    assert_eq!(menu.history().len(), start_history.len() + path.len());

    for (depth, _) in path.iter().enumerate().rev() {
        menu.resume_last_state().unwrap();
        // One window per open state, none duplicated on the way back
        assert_eq!(menu.stage().windows().len(), depth + 1);
    }
    assert_eq!(menu.current_state(), Some(MenuStateId::Game));
    assert_eq!(menu.history(), start_history.as_slice());
}

#[test]
fn test_resume_with_empty_history_fails() {
    let (host, _) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);

    assert_eq!(menu.resume_last_state(), Err(MenuError::HistoryEmpty));
    assert_eq!(menu.current_state(), Some(MenuStateId::Title));
}

#[test]
fn test_new_game_then_pause_and_game_menu() {
    let (host, calls) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);

    let new_game = find_widget(&menu, "Start new game");
    assert!(menu.activate(new_game));
    assert_eq!(calls.borrow().new_games, 1);
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    assert!(menu.stage().is_empty());
    assert_eq!(calls.borrow().frozen.last(), Some(&false));

    // Gameplay keys fall through
    assert!(!menu.dispatch_input(Key::Left));
    assert!(!menu.dispatch_input(Key::Other(97)));

    assert!(menu.dispatch_input(Key::P));
    assert_eq!(menu.current_state(), Some(MenuStateId::Pause));
    assert!(menu.dispatch_input(Key::P));
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));

    assert!(menu.dispatch_input(Key::Escape));
    assert_eq!(menu.current_state(), Some(MenuStateId::Game));
    assert_eq!(menu.history(), &[MenuStateId::Idle]);
    assert!(menu.dispatch_input(Key::Back));
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
}

#[test]
fn test_sparse_load_listing() {
    let (host, _) = ScriptedHost::new(&[0, 2, 4]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Load).unwrap();

    let rows = top_rows(&menu);
    assert_eq!(rows.len(), 3);
    assert!(rows[0][0].starts_with("Quick load - "));
    assert_eq!(rows[0][1], "Cancel");
    assert_eq!(rows[1][0], "Load 3 - empty");
    assert!(rows[1][1].starts_with("Load 4 - "));
    assert_eq!(rows[2][0], "Load 1 - empty");
    assert!(rows[2][1].starts_with("Load 2 - "));

    let window = menu.stage().top().unwrap();
    let empty = window.widgets().filter(|w| w.is_disabled()).count();
    assert_eq!(empty, 2);
}

#[test]
fn test_load_failure_keeps_screen_and_shows_message() {
    let (host, calls) = ScriptedHost::new(&[1]);
    let mut menu = standard_menu(host.failing_loads());
    menu.change_state(MenuStateId::Load).unwrap();

    let slot = find_widget(&menu, "Load 1");
    assert!(!menu.activate(slot));
    assert_eq!(calls.borrow().loads, vec![1]);
    assert_eq!(menu.current_state(), Some(MenuStateId::Load));
    assert_eq!(menu.current_message(), Some("Loading failed!"));

    // Confirm dismisses the message without activating anything
    assert!(menu.dispatch_input(Key::Enter));
    assert_eq!(menu.message_count(), 0);
    assert_eq!(calls.borrow().loads, vec![1]);
    assert_eq!(menu.current_state(), Some(MenuStateId::Load));
}

#[test]
fn test_load_success_enters_gameplay() {
    let (host, calls) = ScriptedHost::new(&[1]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Load).unwrap();

    // Focus starts on the first populated slot
    assert!(menu.dispatch_input(Key::Enter));
    assert_eq!(calls.borrow().loads, vec![1]);
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    assert!(menu.history().is_empty());
    assert!(menu.stage().is_empty());
}

#[test]
fn test_save_screen_offers_empty_slots() {
    let (host, calls) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Idle).unwrap();
    menu.change_state(MenuStateId::Game).unwrap();
    assert!(menu.perform(&Action::ChangeState(MenuStateId::Save)));

    let rows = top_rows(&menu);
    assert_eq!(rows[1], vec!["Save 1 - empty", "Save 2 - empty"]);

    let slot = find_widget(&menu, "Save 2");
    assert!(menu.activate(slot));
    assert_eq!(calls.borrow().saves, vec![2]);
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
}

#[test]
fn test_quick_save_message_is_dismissed() {
    let (host, calls) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Idle).unwrap();

    assert!(menu.dispatch_input(Key::F5));
    assert_eq!(calls.borrow().saves, vec![0]);
    assert_eq!(menu.current_message(), Some("Game saved"));

    // ESCAPE closes the message instead of opening the game menu
    assert!(menu.dispatch_input(Key::Escape));
    assert_eq!(menu.current_message(), None);
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));

    assert!(menu.dispatch_input(Key::F9));
    assert_eq!(calls.borrow().loads, vec![0]);
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
}

#[test]
fn test_game_over_returns_to_title() {
    let (host, _) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Idle).unwrap();
    menu.change_state(MenuStateId::GameOver).unwrap();
    assert!(menu.history().is_empty());
    assert!(menu.flags().clear_the_screen);

    assert!(menu.dispatch_input(Key::Escape));
    assert_eq!(menu.current_state(), Some(MenuStateId::Title));
    assert!(menu.history().is_empty());
}

#[test]
fn test_change_language_relabels_menus() {
    let (host, _) = ScriptedHost::new(&[]);
    let mut menu = standard_menu(host);
    menu.change_state(MenuStateId::Idle).unwrap();
    menu.change_state(MenuStateId::Game).unwrap();
    menu.change_state(MenuStateId::ChangeLang).unwrap();

    let german = find_widget(&menu, "Deutsch");
    assert!(menu.activate(german));
    assert_eq!(menu.i18n().locale(), "de");
    assert_eq!(menu.current_state(), Some(MenuStateId::Game));

    menu.change_state(MenuStateId::Load).unwrap();
    assert_eq!(top_rows(&menu)[0][1], "Abbrechen");
}
