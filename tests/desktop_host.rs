use rpg_menu::save::SaveManager;
use rpg_menu::{DesktopHost, Key, Localization, MenuService, MenuStateId, SlotGrid, screens};
use std::path::Path;
use tempfile::TempDir;

fn desktop_menu(dir: &Path) -> MenuService {
    let saves = SaveManager::new(dir).unwrap();
    let host = DesktopHost::new(saves, false);
    let mut menu = MenuService::new(Box::new(host), Localization::builtin()).with_slot_grid(SlotGrid::default());
    screens::install_standard_menus(&mut menu).unwrap();
    menu
}

fn title_labels(menu: &MenuService) -> Vec<String> {
    menu.stage()
        .top()
        .unwrap()
        .widgets()
        .map(|w| w.text().to_string())
        .collect()
}

#[test]
fn test_quick_save_then_continue_from_title() {
    let dir = TempDir::new().unwrap();

    let mut menu = desktop_menu(dir.path());
    assert_eq!(
        title_labels(&menu),
        vec!["Load game", "Start new game", "Fullscreen mode", "Exit game (Esc)"]
    );

    // Load game -> Start new game
    assert!(menu.dispatch_input(Key::Down));
    assert!(menu.dispatch_input(Key::Enter));
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));

    assert!(menu.dispatch_input(Key::F5));
    assert_eq!(menu.current_message(), Some("Game saved"));
    assert!(SaveManager::new(dir.path()).unwrap().save_exists(0));

    // Dismiss, then leave through the title screen
    assert!(menu.dispatch_input(Key::Enter));
    assert!(menu.dispatch_input(Key::Escape));
    assert_eq!(menu.current_state(), Some(MenuStateId::Game));
    menu.change_state(MenuStateId::Title).unwrap();
    assert!(menu.dispatch_input(Key::Escape));
    assert!(menu.exit_requested());

    // A fresh session offers to continue from the quick save
    let mut menu = desktop_menu(dir.path());
    assert_eq!(title_labels(&menu)[0], "Continue at last save point");
    assert!(menu.dispatch_input(Key::Enter));
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));
    assert_eq!(menu.current_message(), None);
}

#[test]
fn test_save_into_new_slot_grows_listing() {
    let dir = TempDir::new().unwrap();
    let mut menu = desktop_menu(dir.path());
    menu.change_state(MenuStateId::Idle).unwrap();
    menu.change_state(MenuStateId::Game).unwrap();
    menu.change_state(MenuStateId::Save).unwrap();

    // Quick save row plus one empty tail row
    assert_eq!(menu.stage().top().unwrap().rows.len(), 2);

    let slot = menu
        .stage()
        .top()
        .unwrap()
        .widgets()
        .find(|w| w.text() == "Save 2 - empty")
        .map(|w| w.id)
        .unwrap();
    assert!(menu.activate(slot));
    assert_eq!(menu.current_state(), Some(MenuStateId::Idle));

    menu.change_state(MenuStateId::Game).unwrap();
    menu.change_state(MenuStateId::Save).unwrap();
    let window = menu.stage().top().unwrap();
    assert_eq!(window.rows.len(), 3);
    assert!(window.rows[2][1].text().starts_with("Save 2 - "));
    assert_ne!(window.rows[2][1].text(), "Save 2 - empty");
}

#[test]
fn test_fullscreen_toggle_relabels_title() {
    let dir = TempDir::new().unwrap();
    let mut menu = desktop_menu(dir.path());

    let toggle = menu
        .stage()
        .top()
        .unwrap()
        .widgets()
        .find(|w| w.text() == "Fullscreen mode")
        .map(|w| w.id)
        .unwrap();
    assert!(menu.activate(toggle));
    assert!(menu.host().is_fullscreen());

    menu.change_state(MenuStateId::Title).unwrap();
    assert!(title_labels(&menu).contains(&"Window mode".to_string()));
}
