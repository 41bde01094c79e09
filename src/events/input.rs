//! Input signals.
//!
//! The input system publishes a [`KeyPressedSignal`] for every key pressed
//! since the previous frame and a [`KeyHeldSignal`] per frame for each key
//! still held down. Consumers translate raw codes through the
//! [`InputBindings`](crate::resources::input::InputBindings) resource into an
//! [`InputAction`].

use crate::components::direction::Direction;
use crate::platform::KeyCode;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Turn the snake (WASD or arrows).
    Steer(Direction),
    /// Spawn the snake if it is not alive (F1).
    Start,
    /// Borderless fullscreen (F10).
    ToggleFullscreen,
    /// Debug overlay (F11).
    ToggleDebug,
}

/// A key went down since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedSignal {
    pub key: KeyCode,
}

/// A key is still down this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHeldSignal {
    pub key: KeyCode,
}
