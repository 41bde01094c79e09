//! Clock system.
//!
//! Runs first every frame. Reads the host clock once and stores the result in
//! the shared [`WorldTime`] resource, applying `time_scale`, so every later
//! system sees the same delta.

use bevy_ecs::prelude::*;

use crate::context::GameContext;
use crate::error::{GameError, GameResult};
use crate::resources::worldtime::WorldTime;
use crate::scheduler::GameSystem;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds.
pub fn update_world_time(world: &mut World, dt: f32) -> GameResult<()> {
    let mut wt = world
        .get_resource_mut::<WorldTime>()
        .ok_or(GameError::MissingResource("WorldTime"))?;
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
    Ok(())
}

#[derive(Debug, Default)]
pub struct ClockSystem;

impl GameSystem for ClockSystem {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<WorldTime>() {
            ctx.world.insert_resource(WorldTime::default());
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        let dt = ctx.platform.seconds_since_last_frame();
        update_world_time(ctx.world, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_applies_to_delta_and_elapsed() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            time_scale: 0.5,
            ..Default::default()
        });
        update_world_time(&mut world, 0.2).unwrap();
        update_world_time(&mut world, 0.2).unwrap();
        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 0.1).abs() < 1e-6);
        assert!((wt.elapsed - 0.2).abs() < 1e-6);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn missing_world_time_is_reported() {
        let mut world = World::new();
        assert!(matches!(
            update_world_time(&mut world, 0.1),
            Err(GameError::MissingResource("WorldTime"))
        ));
    }
}
