//! Screen-Space GUI
//!
//! The widget model the menu screens build into, and (with the `sdl`
//! feature) the renderer that draws it.
//!
//! # Architecture
//!
//! - [`Stage`] holds every open [`Window`]; windows hold rows of [`Widget`]s
//! - Each build gets a fresh [`GuiContext`] that allocates widget ids and
//!   records the focus target
//! - Buttons carry an [`Action`](crate::menu::Action) the menu service
//!   performs when they are activated
//!
//! # Example Usage
//!
//! ```ignore
//! fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
//!     let mut window = Window::new(menu.text(gui, "pausemenu.title"));
//!     let resume = window.add(gui.button("Resume", Action::ChangeState(MenuStateId::Idle)));
//!     gui.focus(resume);
//!     let index = menu.add_window(window);
//!     menu.center(index);
//! }
//! ```

pub mod context;
pub mod widget;

#[cfg(feature = "sdl")]
pub mod render;

pub use context::GuiContext;
pub use widget::{ImageRef, Stage, Widget, WidgetId, WidgetKind, Window};

#[cfg(feature = "sdl")]
pub use render::{MenuStyle, ThumbnailCache, render_menu};
