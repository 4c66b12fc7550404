//! Menu state machine for a 2D RPG
//!
//! Screens (title, pause, load, save, ...) are registered as handlers with a
//! [`MenuService`], which switches between them, keeps a back history, routes
//! key input, and shows transient messages. The game plugs in through
//! [`EngineHost`].

pub mod config;
pub mod gui;
pub mod host;
pub mod i18n;
pub mod input_system;
pub mod menu;
pub mod save;
pub mod screens;

#[cfg(feature = "sdl")]
pub mod text;

#[cfg(test)]
mod testing;

pub use config::{MenuConfig, SlotGrid};
pub use host::{DesktopHost, EngineHost, GameSession};
pub use i18n::Localization;
pub use input_system::Key;
pub use menu::{Action, EscapePolicy, MenuError, MenuService, MenuStateHandler, MenuStateId, StateFlags};
