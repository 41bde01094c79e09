//! Signal and handler to toggle the debug overlay.
//!
//! Publishing a [`SwitchDebugSignal`] flips the presence of the [`DebugMode`]
//! resource. The UI pass draws diagnostics only while it is present.

use log::info;

use crate::context::GameContext;
use crate::error::GameResult;
use crate::resources::debugmode::DebugMode;

#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchDebugSignal;

/// Toggles the [`DebugMode`] resource.
pub fn switch_debug_handler(_signal: &SwitchDebugSignal, ctx: &mut GameContext<'_>) -> GameResult<()> {
    if ctx.world.contains_resource::<DebugMode>() {
        ctx.world.remove_resource::<DebugMode>();
        info!("Debug mode disabled");
    } else {
        ctx.world.insert_resource(DebugMode);
        info!("Debug mode enabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessPlatform;
    use bevy_ecs::prelude::World;

    #[test]
    fn publishing_twice_restores_the_initial_state() {
        let mut world = World::new();
        let mut platform = HeadlessPlatform::new(100, 100);
        let mut ctx = GameContext::new(&mut world, &mut platform);
        ctx.subscribe(switch_debug_handler);
        ctx.publish(SwitchDebugSignal).unwrap();
        assert!(ctx.world.contains_resource::<DebugMode>());
        ctx.publish(SwitchDebugSignal).unwrap();
        assert!(!ctx.world.contains_resource::<DebugMode>());
    }
}
