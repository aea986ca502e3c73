//! Keyboard state for the driving controls
//!
//! DOM key events write into a [`KeyboardState`] owned by the host; the tick
//! only ever reads a [`TickInput`] snapshot of it.

use crate::sim::TickInput;

/// Logical driving controls, independent of the physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKey {
    Forward,
    Backward,
    Left,
    Right,
}

impl DriveKey {
    /// Map a `KeyboardEvent.key` value to a control (WASD or arrows)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "arrowup" => Some(DriveKey::Forward),
            "s" | "arrowdown" => Some(DriveKey::Backward),
            "a" | "arrowleft" => Some(DriveKey::Left),
            "d" | "arrowright" => Some(DriveKey::Right),
            _ => None,
        }
    }
}

/// Currently held controls
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: TickInput,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: DriveKey, pressed: bool) {
        match key {
            DriveKey::Forward => self.held.forward = pressed,
            DriveKey::Backward => self.held.backward = pressed,
            DriveKey::Left => self.held.left = pressed,
            DriveKey::Right => self.held.right = pressed,
        }
    }

    /// Handle a keydown; returns true if the key is a driving control
    pub fn key_down(&mut self, key: &str) -> bool {
        match DriveKey::from_key(key) {
            Some(k) => {
                self.set(k, true);
                true
            }
            None => false,
        }
    }

    /// Handle a keyup; returns true if the key is a driving control
    pub fn key_up(&mut self, key: &str) -> bool {
        match DriveKey::from_key(key) {
            Some(k) => {
                self.set(k, false);
                true
            }
            None => false,
        }
    }

    /// Drop every held key (focus lost: keyup events will never arrive)
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    pub fn snapshot(&self) -> TickInput {
        self.held
    }
}
