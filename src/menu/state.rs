//! Menu state identifiers and per-state behaviour flags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one mode of the menu layer
///
/// `Idle` is the "no overlay" state: the game is running and the menu
/// service is only listening for the key that opens a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MenuStateId {
    Title,
    GameOver,
    Game,
    Idle,
    Pause,
    Load,
    Save,
    ChangeLang,
}

impl MenuStateId {
    /// Every state the standard menu set registers a handler for
    pub const ALL: [MenuStateId; 8] = [
        MenuStateId::Title,
        MenuStateId::GameOver,
        MenuStateId::Game,
        MenuStateId::Idle,
        MenuStateId::Pause,
        MenuStateId::Load,
        MenuStateId::Save,
        MenuStateId::ChangeLang,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MenuStateId::Title => "TITLE",
            MenuStateId::GameOver => "GAMEOVER",
            MenuStateId::Game => "GAME",
            MenuStateId::Idle => "IDLE",
            MenuStateId::Pause => "PAUSE",
            MenuStateId::Load => "LOAD",
            MenuStateId::Save => "SAVE",
            MenuStateId::ChangeLang => "CHANGELANG",
        }
    }
}

impl fmt::Display for MenuStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behaviour the menu service applies when it switches into a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateFlags {
    /// Pause the game simulation while this state is active
    pub freeze_the_world: bool,

    /// Draw a black background instead of the (frozen) world
    pub clear_the_screen: bool,

    /// Close every open window before building this state's GUI
    pub clear_the_menu: bool,

    /// Forget the navigation history when entering this state
    pub clear_history: bool,

    /// Swallow the platform BACK key instead of letting the OS handle it
    pub catch_back_key: bool,

    /// Swallow the platform MENU key
    pub catch_menu_key: bool,
}

impl StateFlags {
    /// Flags the standard menu set uses for `id`
    pub fn standard(id: MenuStateId) -> Self {
        let overlay = StateFlags {
            freeze_the_world: true,
            clear_the_screen: false,
            clear_the_menu: false,
            clear_history: false,
            catch_back_key: true,
            catch_menu_key: true,
        };

        match id {
            MenuStateId::Title | MenuStateId::GameOver => StateFlags {
                freeze_the_world: true,
                clear_the_screen: true,
                clear_the_menu: true,
                clear_history: true,
                catch_back_key: false,
                catch_menu_key: false,
            },
            MenuStateId::Game => StateFlags {
                clear_the_menu: true,
                catch_menu_key: false,
                ..overlay
            },
            MenuStateId::Idle => StateFlags {
                freeze_the_world: false,
                clear_the_screen: false,
                clear_the_menu: true,
                clear_history: true,
                catch_back_key: false,
                catch_menu_key: true,
            },
            MenuStateId::Pause => StateFlags {
                clear_the_menu: true,
                ..overlay
            },
            MenuStateId::Load | MenuStateId::Save | MenuStateId::ChangeLang => overlay,
        }
    }
}

/// What a state does with ESCAPE / BACK / MENU
///
/// Each handler declares its own policy; there is no global rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Request process exit (the title screen has nothing to go back to)
    ExitGame,
    /// Return to whichever state opened this one
    ResumeLast,
    /// Always go to a fixed state
    ChangeState(MenuStateId),
    /// Leave the key unconsumed
    Ignore,
}
