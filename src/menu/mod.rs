//! Menu State Machine
//!
//! The menu layer is a set of named states (title, pause, load, ...) each
//! described by a [`MenuStateHandler`]. The [`MenuService`] owns the handler
//! registry, the current state, and a navigation history used for "back".
//!
//! # Control flow
//!
//! - Startup registers one handler per [`MenuStateId`] and changes into the
//!   initial state.
//! - Entering a state invokes the handler's `create_gui` once.
//! - Every released key goes through [`MenuService::dispatch_input`], which
//!   forwards it to the current handler's `process_input`.
//! - Handlers and widget [`Action`]s call back into the service to request
//!   transitions.
//!
//! # Example
//!
//! ```ignore
//! let mut menu = MenuService::new(Box::new(host), Localization::builtin());
//! screens::install_standard_menus(&mut menu)?;
//!
//! // In the event loop
//! if !menu.dispatch_input(key) {
//!     // Key falls through to the game world
//! }
//! ```

pub mod action;
pub mod error;
pub mod handler;
pub mod service;
pub mod state;

pub use action::Action;
pub use error::MenuError;
pub use handler::{FnHandler, MenuStateHandler};
pub use service::MenuService;
pub use state::{EscapePolicy, MenuStateId, StateFlags};
