//! Menu service
//!
//! Owns the handler registry, the current state, the navigation history, the
//! widget stage, and the queue of transient messages. Handlers are stored
//! behind `Rc` so a callback can receive `&mut MenuService` and request a
//! transition from inside `create_gui` or `process_input`.

use super::{Action, EscapePolicy, MenuError, MenuStateHandler, MenuStateId, StateFlags};
use crate::config::SlotGrid;
use crate::gui::{GuiContext, Stage, Window, WidgetId};
use crate::host::EngineHost;
use crate::i18n::Localization;
use crate::input_system::Key;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

pub struct MenuService {
    handlers: HashMap<MenuStateId, Rc<dyn MenuStateHandler>>,
    current: Option<MenuStateId>,
    history: Vec<MenuStateId>,
    stage: Stage,
    messages: VecDeque<String>,
    host: Box<dyn EngineHost>,
    i18n: Localization,
    slot_grid: SlotGrid,
    exit_requested: bool,
}

impl MenuService {
    pub fn new(host: Box<dyn EngineHost>, i18n: Localization) -> Self {
        MenuService {
            handlers: HashMap::new(),
            current: None,
            history: Vec::new(),
            stage: Stage::new(),
            messages: VecDeque::new(),
            host,
            i18n,
            slot_grid: SlotGrid::default(),
            exit_requested: false,
        }
    }

    pub fn with_slot_grid(mut self, slot_grid: SlotGrid) -> Self {
        self.slot_grid = slot_grid;
        self
    }

    // === Registry ===

    /// Registers or replaces the handler for its state, returning the old one
    pub fn put_state_handler(
        &mut self,
        handler: impl MenuStateHandler + 'static,
    ) -> Option<Rc<dyn MenuStateHandler>> {
        let handler: Rc<dyn MenuStateHandler> = Rc::new(handler);
        self.handlers.insert(handler.state_id(), handler)
    }

    /// Registers a batch of handlers
    ///
    /// Fails without registering anything if two handlers share a state, or
    /// if a state already has a handler.
    pub fn register_all(&mut self, handlers: Vec<Box<dyn MenuStateHandler>>) -> Result<(), MenuError> {
        let mut seen = Vec::with_capacity(handlers.len());
        for handler in &handlers {
            let id = handler.state_id();
            if seen.contains(&id) || self.handlers.contains_key(&id) {
                return Err(MenuError::DuplicateHandler(id));
            }
            seen.push(id);
        }

        for handler in handlers {
            let handler: Rc<dyn MenuStateHandler> = Rc::from(handler);
            self.handlers.insert(handler.state_id(), handler);
        }
        Ok(())
    }

    /// Fails on the first id in `ids` that has no handler
    pub fn ensure_registered(&self, ids: &[MenuStateId]) -> Result<(), MenuError> {
        match ids.iter().find(|id| !self.handlers.contains_key(id)) {
            Some(&missing) => Err(MenuError::MissingHandler(missing)),
            None => Ok(()),
        }
    }

    pub fn is_registered(&self, id: MenuStateId) -> bool {
        self.handlers.contains_key(&id)
    }

    // === State machine ===

    pub fn current_state(&self) -> Option<MenuStateId> {
        self.current
    }

    /// Previously active states, oldest first
    pub fn history(&self) -> &[MenuStateId] {
        &self.history
    }

    /// Flags of the current state
    pub fn flags(&self) -> StateFlags {
        self.current
            .and_then(|id| self.handlers.get(&id))
            .map(|h| h.flags())
            .unwrap_or_default()
    }

    /// Switches into `id`, remembering the current state for `resume_last_state`
    ///
    /// Fails if `id` has no handler; nothing changes in that case.
    pub fn change_state(&mut self, id: MenuStateId) -> Result<(), MenuError> {
        self.enter_state(id, true)
    }

    /// Returns to the most recently remembered state
    pub fn resume_last_state(&mut self) -> Result<(), MenuError> {
        if self.exit_requested {
            return Err(MenuError::ExitRequested);
        }
        let last = self.history.pop().ok_or(MenuError::HistoryEmpty)?;
        if let Err(e) = self.enter_state(last, false) {
            self.history.push(last);
            return Err(e);
        }
        Ok(())
    }

    fn enter_state(&mut self, id: MenuStateId, remember: bool) -> Result<(), MenuError> {
        if self.exit_requested {
            return Err(MenuError::ExitRequested);
        }
        let handler = self
            .handlers
            .get(&id)
            .cloned()
            .ok_or(MenuError::UnknownState(id))?;
        let flags = handler.flags();

        // Transient messages belong to the state being left
        self.messages.clear();
        if flags.clear_the_menu {
            self.stage.clear();
        }
        self.stage.begin_layer(id);

        if remember {
            if let Some(previous) = self.current {
                self.history.push(previous);
            }
        }
        if flags.clear_history {
            self.history.clear();
        }

        let previous = self.current.replace(id);
        match previous {
            Some(previous) => log::info!("menu state {} -> {}", previous, id),
            None => log::info!("menu state -> {}", id),
        }

        self.host.freeze_world(flags.freeze_the_world);
        self.host.catch_keys(flags.catch_back_key, flags.catch_menu_key);

        let mut gui = GuiContext::new(self.stage.next_widget_id());
        handler.create_gui(self, &mut gui);

        // create_gui may itself have switched state; its build wins
        if self.current == Some(id) {
            let (focus, next_id, images) = gui.finish();
            self.stage.finish_build(next_id, images);
            if let Some(focus) = focus {
                self.stage.set_focus(focus);
            }
        }
        Ok(())
    }

    // === Input ===

    /// Forwards a released key to the current state
    ///
    /// Returns true if the key was consumed. Unconsumed keys belong to the
    /// game world.
    pub fn dispatch_input(&mut self, key: Key) -> bool {
        if self.exit_requested {
            return false;
        }

        if !self.messages.is_empty() && (key.is_confirm() || key.is_cancel()) {
            self.dismiss_message();
            return true;
        }

        let Some(handler) = self.current.and_then(|id| self.handlers.get(&id).cloned()) else {
            return false;
        };
        if handler.process_input(key, self) {
            return true;
        }

        match key {
            Key::Up => self.stage.focus_previous(),
            Key::Down => self.stage.focus_next(),
            Key::Enter | Key::Space => match self.stage.focus() {
                Some(focused) => self.activate(focused),
                None => false,
            },
            _ => false,
        }
    }

    /// Applies a handler's ESCAPE policy; returns whether the key is consumed
    pub fn apply_escape_policy(&mut self, policy: EscapePolicy) -> bool {
        match policy {
            EscapePolicy::ExitGame => {
                self.request_exit();
                true
            }
            EscapePolicy::ResumeLast => accepted(self.resume_last_state()),
            EscapePolicy::ChangeState(id) => accepted(self.change_state(id)),
            EscapePolicy::Ignore => false,
        }
    }

    // === Widgets ===

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Adds a window on top of the open ones, returning its index
    pub fn add_window(&mut self, window: Window) -> usize {
        self.stage.add_window(window)
    }

    pub fn center(&mut self, window: usize) {
        self.stage.center(window);
    }

    pub fn focus(&mut self, id: WidgetId) -> bool {
        self.stage.set_focus(id)
    }

    /// Clicks a widget; returns false if it is not an activatable widget
    pub fn activate(&mut self, id: WidgetId) -> bool {
        let Some(action) = self.stage.find(id).and_then(|w| w.action()).cloned() else {
            return false;
        };
        log::debug!("activated widget {:?}: {:?}", id, action);
        self.perform(&action)
    }

    /// Executes a widget action
    pub fn perform(&mut self, action: &Action) -> bool {
        match action {
            Action::ChangeState(id) => accepted(self.change_state(*id)),
            Action::ResumeLast => accepted(self.resume_last_state()),
            Action::LoadSlot { slot, failure } => {
                if self.host.load_slot(*slot) {
                    accepted(self.change_state(MenuStateId::Idle))
                } else {
                    log::warn!("loading slot {} failed", slot);
                    self.show_message(failure.clone());
                    false
                }
            }
            Action::SaveSlot { slot, failure } => {
                if self.host.save_slot(*slot) {
                    accepted(self.change_state(MenuStateId::Idle))
                } else {
                    log::warn!("saving slot {} failed", slot);
                    self.show_message(failure.clone());
                    false
                }
            }
            Action::StartNewGame => {
                self.host.start_new_game();
                accepted(self.change_state(MenuStateId::Idle))
            }
            Action::ToggleFullscreen => {
                self.host.toggle_fullscreen();
                true
            }
            Action::ShowMessage(text) => {
                self.show_message(text.clone());
                true
            }
            Action::ChangeLocale(locale) => {
                if !self.i18n.set_locale(locale) {
                    return false;
                }
                log::info!("locale changed to {}", locale);
                accepted(self.resume_last_state())
            }
            Action::Exit => {
                self.request_exit();
                true
            }
        }
    }

    // === Transient messages ===

    /// Shows a dismissible notice without changing state
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.messages.push_back(text.into());
    }

    pub fn current_message(&self) -> Option<&str> {
        self.messages.front().map(String::as_str)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn dismiss_message(&mut self) -> Option<String> {
        self.messages.pop_front()
    }

    // === Services ===

    /// Looks up menu text in the given localization container
    pub fn localized_text(&self, container: &str, key: &str) -> String {
        self.i18n.text(container, key)
    }

    /// Looks up menu text in the container of the build in progress
    pub fn text(&self, gui: &GuiContext, key: &str) -> String {
        self.localized_text(gui.container(), key)
    }

    pub fn i18n(&self) -> &Localization {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut Localization {
        &mut self.i18n
    }

    pub fn host(&self) -> &dyn EngineHost {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> &mut dyn EngineHost {
        self.host.as_mut()
    }

    pub fn slot_grid(&self) -> SlotGrid {
        self.slot_grid
    }

    /// Asks the host to terminate the process
    ///
    /// Only the first request reaches the host; afterwards no transitions or
    /// input are accepted.
    pub fn request_exit(&mut self) {
        if self.exit_requested {
            return;
        }
        log::info!("exit requested from {:?}", self.current);
        self.exit_requested = true;
        self.host.exit();
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

fn accepted(result: Result<(), MenuError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("menu transition rejected: {}", e);
            false
        }
    }
}
