//! Key input for the menu layer
//!
//! The menu service works on [`Key`], a small platform-neutral key set. With
//! the `sdl` feature, [`InputSystem`] translates SDL2 events into keys.

/// Keys the menu layer understands
///
/// Anything else is carried as `Other` with the platform key code so it can
/// still fall through to gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// Android-style BACK
    Back,
    /// Android-style MENU
    Menu,
    Enter,
    Space,
    Up,
    Down,
    Left,
    Right,
    P,
    /// Quick save
    F5,
    /// Quick load
    F9,
    Other(i32),
}

impl Key {
    /// ESCAPE / BACK / MENU
    pub fn is_cancel(self) -> bool {
        matches!(self, Key::Escape | Key::Back | Key::Menu)
    }

    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[cfg(feature = "sdl")]
pub use sdl_input::{InputEvent, InputSystem};

#[cfg(feature = "sdl")]
mod sdl_input {
    use super::Key;
    use sdl2::EventPump;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    /// Events the front end cares about
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InputEvent {
        /// A key was released
        KeyUp(Key),
        /// The window was closed
        Quit,
    }

    /// Translates SDL2 events into menu keys
    ///
    /// Menus react on key release, so key-down events are ignored.
    #[derive(Debug, Default)]
    pub struct InputSystem;

    impl InputSystem {
        pub fn new() -> Self {
            InputSystem
        }

        pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<InputEvent> {
            let mut events = Vec::new();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => events.push(InputEvent::Quit),
                    Event::KeyUp {
                        keycode: Some(key), ..
                    } => events.push(InputEvent::KeyUp(translate(key))),
                    _ => {}
                }
            }

            events
        }
    }

    fn translate(key: Keycode) -> Key {
        match key {
            Keycode::Escape => Key::Escape,
            Keycode::AcBack => Key::Back,
            Keycode::Menu => Key::Menu,
            Keycode::Return | Keycode::KpEnter => Key::Enter,
            Keycode::Space => Key::Space,
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Left => Key::Left,
            Keycode::Right => Key::Right,
            Keycode::P => Key::P,
            Keycode::F5 => Key::F5,
            Keycode::F9 => Key::F9,
            other => Key::Other(other.into_i32()),
        }
    }
}
