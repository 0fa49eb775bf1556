use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Platform-agnostic key identity.
///
/// Only the keys the engine has a consumer for are named; everything else is
/// carried through as `Unknown` so state tracking stays consistent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    Enter,
    Unknown(u32),
}

/// Current input state for a single window.
///
/// Holds "is down" information only; the runtime applies events as they
/// arrive, and applications read the state at the top of each frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    keys_down: HashSet<Key>,
}

impl InputState {
    /// Returns whether `key` is currently held.
    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Applies a winit window event to the tracked state.
    ///
    /// Events that carry no input meaning are ignored.
    pub fn apply_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Focused(f) => {
                self.focused = *f;
                // Held keys cannot be trusted across a focus loss.
                if !*f {
                    self.keys_down.clear();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => {
                        self.keys_down.insert(key);
                    }
                    ElementState::Released => {
                        self.keys_down.remove(&key);
                    }
                }
            }

            _ => {}
        }
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::Enter => Key::Enter,
            other => Key::Unknown(other as u32),
        },
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_and_release_round_trip() {
        let mut state = InputState::default();
        assert!(!state.is_down(Key::Escape));

        state.keys_down.insert(Key::Escape);
        assert!(state.is_down(Key::Escape));

        state.keys_down.remove(&Key::Escape);
        assert!(!state.is_down(Key::Escape));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        state.keys_down.insert(Key::Space);

        state.apply_window_event(&WindowEvent::Focused(false));
        assert!(!state.is_down(Key::Space));
        assert!(!state.focused);
    }

    #[test]
    fn unknown_keys_stay_distinct() {
        assert_ne!(Key::Unknown(1), Key::Unknown(2));
        assert_ne!(Key::Unknown(0), Key::Escape);
    }
}
