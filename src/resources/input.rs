//! Key bindings resource.
//!
//! Maps raw [`KeyCode`]s to the [`InputAction`]s the game reacts to. Defaults
//! use WASD for movement with the arrow keys as a secondary set, F1 to start,
//! F10 for borderless fullscreen and F11 for the debug overlay.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::direction::Direction;
use crate::events::input::InputAction;
use crate::platform::KeyCode;

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    bindings: FxHashMap<KeyCode, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = FxHashMap::default();
        // Main direction (WASD)
        bindings.insert(KeyCode::W, InputAction::Steer(Direction::Up));
        bindings.insert(KeyCode::A, InputAction::Steer(Direction::Left));
        bindings.insert(KeyCode::S, InputAction::Steer(Direction::Down));
        bindings.insert(KeyCode::D, InputAction::Steer(Direction::Right));
        // Secondary direction (arrows)
        bindings.insert(KeyCode::UP, InputAction::Steer(Direction::Up));
        bindings.insert(KeyCode::LEFT, InputAction::Steer(Direction::Left));
        bindings.insert(KeyCode::DOWN, InputAction::Steer(Direction::Down));
        bindings.insert(KeyCode::RIGHT, InputAction::Steer(Direction::Right));
        // Actions
        bindings.insert(KeyCode::F1, InputAction::Start);
        bindings.insert(KeyCode::F10, InputAction::ToggleFullscreen);
        bindings.insert(KeyCode::F11, InputAction::ToggleDebug);
        InputBindings { bindings }
    }
}

impl InputBindings {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}
