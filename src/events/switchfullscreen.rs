//! Fullscreen toggle signal and handler.
//!
//! Pressing **F10** publishes [`SwitchFullScreenSignal`]; the handler asks the
//! host window to switch between windowed and borderless fullscreen. The grid
//! keeps the dimensions it was sized with at startup.

use log::info;

use crate::context::GameContext;
use crate::error::GameResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchFullScreenSignal;

pub fn switch_fullscreen_handler(
    _signal: &SwitchFullScreenSignal,
    ctx: &mut GameContext<'_>,
) -> GameResult<()> {
    ctx.platform.toggle_borderless();
    info!(
        "Borderless toggled, surface now {}x{}",
        ctx.platform.screen_width(),
        ctx.platform.screen_height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessPlatform;
    use bevy_ecs::prelude::World;

    #[test]
    fn handler_toggles_the_window() {
        let mut world = World::new();
        let mut platform = HeadlessPlatform::new(100, 100);
        {
            let mut ctx = GameContext::new(&mut world, &mut platform);
            ctx.subscribe(switch_fullscreen_handler);
            ctx.publish(SwitchFullScreenSignal).unwrap();
        }
        assert!(platform.is_borderless());
    }
}
