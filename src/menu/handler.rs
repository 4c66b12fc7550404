//! Menu state handler contract
//!
//! A handler is the pair of callbacks the menu service invokes for one state:
//! `create_gui` once when the state is entered, `process_input` for every key
//! released while the state is active. Handlers are immutable after
//! registration; all mutable state lives in the [`MenuService`].

use super::{EscapePolicy, MenuService, MenuStateId, StateFlags};
use crate::gui::GuiContext;
use crate::input_system::Key;

pub trait MenuStateHandler {
    /// The state this handler is registered for
    fn state_id(&self) -> MenuStateId;

    /// Behaviour flags applied on entry
    fn flags(&self) -> StateFlags {
        StateFlags::standard(self.state_id())
    }

    /// How ESCAPE / BACK / MENU are treated in this state
    fn escape_policy(&self) -> EscapePolicy;

    /// Builds the widget tree for this state
    ///
    /// Windows are added through `menu`; widget ids and the focus target are
    /// taken from `gui`.
    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext);

    /// Interprets one key while this state is active
    ///
    /// Returns true if the key was consumed. Unconsumed keys fall through to
    /// widget focus navigation and then to the game world.
    fn process_input(&self, key: Key, menu: &mut MenuService) -> bool {
        if key.is_cancel() {
            return menu.apply_escape_policy(self.escape_policy());
        }
        false
    }
}

type BuildFn = Box<dyn Fn(&mut MenuService, &mut GuiContext)>;
type InputFn = Box<dyn Fn(Key, &mut MenuService) -> bool>;

/// A handler assembled from closures
///
/// Handy for one-off menus and for tests that need a state without a
/// dedicated type.
pub struct FnHandler {
    id: MenuStateId,
    flags: StateFlags,
    escape: EscapePolicy,
    build: BuildFn,
    input: Option<InputFn>,
}

impl FnHandler {
    /// Creates a handler with the standard flags for `id` and an ignored ESCAPE
    pub fn new(id: MenuStateId, build: impl Fn(&mut MenuService, &mut GuiContext) + 'static) -> Self {
        FnHandler {
            id,
            flags: StateFlags::standard(id),
            escape: EscapePolicy::Ignore,
            build: Box::new(build),
            input: None,
        }
    }

    /// A handler that builds nothing
    pub fn empty(id: MenuStateId) -> Self {
        Self::new(id, |_, _| {})
    }

    pub fn with_flags(mut self, flags: StateFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_escape(mut self, escape: EscapePolicy) -> Self {
        self.escape = escape;
        self
    }

    /// Extra key handling, consulted before the escape policy
    pub fn on_input(mut self, input: impl Fn(Key, &mut MenuService) -> bool + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }
}

impl MenuStateHandler for FnHandler {
    fn state_id(&self) -> MenuStateId {
        self.id
    }

    fn flags(&self) -> StateFlags {
        self.flags
    }

    fn escape_policy(&self) -> EscapePolicy {
        self.escape
    }

    fn create_gui(&self, menu: &mut MenuService, gui: &mut GuiContext) {
        (self.build)(menu, gui)
    }

    fn process_input(&self, key: Key, menu: &mut MenuService) -> bool {
        if let Some(input) = &self.input {
            if input(key, menu) {
                return true;
            }
        }
        if key.is_cancel() {
            return menu.apply_escape_policy(self.escape);
        }
        false
    }
}
