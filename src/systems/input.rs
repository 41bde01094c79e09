//! Input capture system.
//!
//! Each frame drains the keys pressed since the previous frame from the host
//! and publishes one [`KeyPressedSignal`] per key, in press order. Pressed
//! keys are remembered; every remembered key still down publishes a
//! [`KeyHeldSignal`], and released keys are forgotten.
//!
//! The window-level bindings (fullscreen and debug overlay) are wired here:
//! a pressed-key handler translates them into [`SwitchFullScreenSignal`] and
//! [`SwitchDebugSignal`], published from inside the delivery of the key
//! signal.

use bevy_ecs::prelude::*;
use log::debug;

use crate::context::GameContext;
use crate::error::GameResult;
use crate::events::input::{InputAction, KeyHeldSignal, KeyPressedSignal};
use crate::events::switchdebug::{SwitchDebugSignal, switch_debug_handler};
use crate::events::switchfullscreen::{SwitchFullScreenSignal, switch_fullscreen_handler};
use crate::platform::KeyCode;
use crate::resources::input::InputBindings;
use crate::scheduler::GameSystem;

/// Action bound to `key` by the [`InputBindings`] resource, if any.
pub fn bound_action(world: &World, key: KeyCode) -> Option<InputAction> {
    world
        .get_resource::<InputBindings>()
        .and_then(|bindings| bindings.action_for(key))
}

/// Forward window-level actions to their own signals.
fn forward_window_actions(signal: &KeyPressedSignal, ctx: &mut GameContext<'_>) -> GameResult<()> {
    match bound_action(ctx.world, signal.key) {
        Some(InputAction::ToggleFullscreen) => ctx.publish(SwitchFullScreenSignal),
        Some(InputAction::ToggleDebug) => ctx.publish(SwitchDebugSignal),
        _ => Ok(()),
    }
}

#[derive(Debug, Default)]
pub struct InputSystem {
    held: Vec<KeyCode>,
}

impl InputSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys pressed in an earlier frame and not yet seen released.
    pub fn held_keys(&self) -> &[KeyCode] {
        &self.held
    }
}

impl GameSystem for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<InputBindings>() {
            ctx.world.insert_resource(InputBindings::default());
        }
        ctx.subscribe(forward_window_actions);
        ctx.subscribe(switch_fullscreen_handler);
        ctx.subscribe(switch_debug_handler);
        Ok(())
    }

    fn update(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        for key in ctx.platform.poll_pressed_keys() {
            debug!("Key pressed: {:?}", key);
            if !self.held.contains(&key) {
                self.held.push(key);
            }
            ctx.publish(KeyPressedSignal { key })?;
        }

        let platform = &*ctx.platform;
        self.held.retain(|key| platform.is_key_down(*key));
        for key in self.held.clone() {
            ctx.publish(KeyHeldSignal { key })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessPlatform;
    use crate::resources::debugmode::DebugMode;
    use crate::resources::signalbus::SignalBus;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (World, HeadlessPlatform, InputSystem) {
        let mut world = World::new();
        world.insert_non_send_resource(SignalBus::new());
        let mut platform = HeadlessPlatform::new(100, 100);
        let mut system = InputSystem::new();
        {
            let mut ctx = GameContext::new(&mut world, &mut platform);
            system.initialize(&mut ctx).unwrap();
        }
        (world, platform, system)
    }

    #[test]
    fn pressed_and_held_keys_are_published() {
        let (mut world, mut platform, mut system) = setup();
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut ctx = GameContext::new(&mut world, &mut platform);
            let pressed = log.clone();
            ctx.subscribe(move |s: &KeyPressedSignal, _ctx: &mut GameContext<'_>| {
                pressed.borrow_mut().push(("pressed", s.key));
                Ok(())
            });
            let held = log.clone();
            ctx.subscribe(move |s: &KeyHeldSignal, _ctx: &mut GameContext<'_>| {
                held.borrow_mut().push(("held", s.key));
                Ok(())
            });
        }

        platform.tap(KeyCode::W);
        platform.hold(KeyCode::D);
        system
            .update(&mut GameContext::new(&mut world, &mut platform))
            .unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                ("pressed", KeyCode::W),
                ("pressed", KeyCode::D),
                ("held", KeyCode::D)
            ]
        );
        assert_eq!(system.held_keys(), &[KeyCode::D]);

        log.borrow_mut().clear();
        platform.release(KeyCode::D);
        system
            .update(&mut GameContext::new(&mut world, &mut platform))
            .unwrap();
        assert!(log.borrow().is_empty());
        assert!(system.held_keys().is_empty());
    }

    #[test]
    fn function_keys_toggle_window_state() {
        let (mut world, mut platform, mut system) = setup();
        platform.tap(KeyCode::F10);
        platform.tap(KeyCode::F11);
        system
            .update(&mut GameContext::new(&mut world, &mut platform))
            .unwrap();
        assert!(platform.is_borderless());
        assert!(world.contains_resource::<DebugMode>());

        platform.tap(KeyCode::F11);
        system
            .update(&mut GameContext::new(&mut world, &mut platform))
            .unwrap();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
