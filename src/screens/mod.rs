//! Standard menu screens
//!
//! One handler per [`MenuStateId`]. [`install_standard_menus`] registers all
//! of them and opens the title screen.
//!
//! | State      | ESCAPE / BACK / MENU      | Other keys               |
//! |------------|---------------------------|--------------------------|
//! | TITLE      | exit the game             |                          |
//! | GAMEOVER   | title screen              |                          |
//! | GAME       | back                      |                          |
//! | IDLE       | game menu                 | P pause, F5/F9 quick     |
//! | PAUSE      | resume gameplay           | P resume gameplay        |
//! | LOAD       | back                      |                          |
//! | SAVE       | back                      |                          |
//! | CHANGELANG | back                      |                          |

pub mod change_lang;
pub mod game;
pub mod game_over;
pub mod idle;
pub mod pause;
pub mod slots;
pub mod title;

pub use change_lang::ChangeLangMenu;
pub use game::GameMenu;
pub use game_over::GameOverMenu;
pub use idle::IdleMenu;
pub use pause::PauseMenu;
pub use slots::{SlotMenu, SlotMode};
pub use title::TitleMenu;

use crate::gui::{GuiContext, WidgetId, Window};
use crate::menu::{Action, MenuError, MenuService, MenuStateHandler, MenuStateId};

/// Registers every standard screen and enters TITLE
pub fn install_standard_menus(menu: &mut MenuService) -> Result<(), MenuError> {
    menu.register_all(standard_handlers())?;
    menu.ensure_registered(&MenuStateId::ALL)?;
    menu.change_state(MenuStateId::Title)
}

pub fn standard_handlers() -> Vec<Box<dyn MenuStateHandler>> {
    vec![
        Box::new(TitleMenu),
        Box::new(GameOverMenu),
        Box::new(GameMenu),
        Box::new(IdleMenu),
        Box::new(PauseMenu),
        Box::new(SlotMenu::new(SlotMode::Load)),
        Box::new(SlotMenu::new(SlotMode::Save)),
        Box::new(ChangeLangMenu),
    ]
}

/// Adds a one-button-per-row window and centers it
///
/// `entries` are (text key, action) pairs; returns the id of the first button.
fn column_window(
    menu: &mut MenuService,
    gui: &mut GuiContext,
    title_key: &str,
    entries: Vec<(&str, Action)>,
) -> Option<WidgetId> {
    let mut window = Window::new(menu.text(gui, title_key));
    let mut first = None;

    for (key, action) in entries {
        let label = menu.text(gui, key);
        let button = gui.button(label, action);
        window.row();
        let id = window.add(button);
        first.get_or_insert(id);
    }

    let index = menu.add_window(window);
    menu.center(index);
    first
}

/// Text key for the fullscreen toggle, naming the mode it switches to
fn fullscreen_key(menu: &MenuService, prefix: &str) -> String {
    if menu.host().is_fullscreen() {
        format!("{}.windowed", prefix)
    } else {
        format!("{}.fullscreen", prefix)
    }
}
