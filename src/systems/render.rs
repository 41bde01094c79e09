//! Draw dispatcher.
//!
//! Collects every entity carrying a [`Drawable`], orders them by z-index
//! (ties keep creation order) and invokes each callback with its entity.
//! Board, objects and HUD layer correctly without anyone ordering their
//! drawing by hand.
//!
//! The DrawUI pass adds the debug overlay while the
//! [`DebugMode`](crate::resources::debugmode::DebugMode) resource is present.

use bevy_ecs::prelude::*;

use crate::components::drawable::Drawable;
use crate::context::GameContext;
use crate::error::GameResult;
use crate::platform::{Color, Platform};
use crate::resources::debugmode::DebugMode;
use crate::resources::worldtime::WorldTime;
use crate::scheduler::GameSystem;

/// Invoke every drawable in ascending z-order.
pub fn dispatch_draw(world: &mut World, platform: &mut dyn Platform) {
    let mut to_draw: Vec<(Entity, Drawable)> = {
        let mut q = world.query::<(Entity, &Drawable)>();
        q.iter(world).map(|(e, d)| (e, *d)).collect()
    };
    // Creation order first, then a stable sort on z.
    to_draw.sort_by_key(|(e, _)| e.index());
    to_draw.sort_by_key(|(_, d)| d.z_index);

    let world: &World = world;
    for (entity, drawable) in to_draw {
        (drawable.draw)(entity, world, &mut *platform);
    }
}

pub fn render_debug_ui(world: &mut World, platform: &mut dyn Platform) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let fps = world.get_resource::<WorldTime>().map_or(0, |t| t.fps());
    platform.draw_text(&format!("{} fps", fps), 10, 10, 20, Color::WHITE);

    let entity_count = world.query::<Entity>().iter(world).count();
    let text = format!("Entities: {}", entity_count);
    platform.draw_text(&text, 10, 34, 20, Color::WHITE);
}

#[derive(Debug, Default)]
pub struct DrawSystem;

impl GameSystem for DrawSystem {
    fn name(&self) -> &'static str {
        "draw"
    }

    fn draw(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        dispatch_draw(ctx.world, ctx.platform);
        Ok(())
    }

    fn draw_ui(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        render_debug_ui(ctx.world, ctx.platform);
        Ok(())
    }
}
