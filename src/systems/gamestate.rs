//! Game-state HUD.
//!
//! Owns one drawable on the HUD layer showing the score in the top-right
//! corner and, while no snake is alive, a centred start prompt. The score is
//! the live snake's apple count, or the last score once it has been reset.

use bevy_ecs::prelude::*;

use crate::components::drawable::Drawable;
use crate::components::snake::Snake;
use crate::components::zindex::ZIndex;
use crate::context::GameContext;
use crate::entitystore::EntityStore;
use crate::error::GameResult;
use crate::platform::{Color, Platform};
use crate::scheduler::GameSystem;
use crate::systems::snake::SnakeController;

pub const START_PROMPT: &str = "Press F1 to Start";
const SCORE_SIZE: i32 = 32;
const PROMPT_SIZE: i32 = 40;
const MARGIN: i32 = 30;

/// Score to display, and whether a snake is alive.
pub fn current_score(world: &World) -> (u32, bool) {
    let Some(controller) = world.get_resource::<SnakeController>() else {
        return (0, false);
    };
    match controller.entity() {
        Some(entity) => (
            world.get::<Snake>(entity).map_or(0, |s| s.apples_eaten),
            true,
        ),
        None => (controller.last_score(), false),
    }
}

fn draw_hud(_entity: Entity, world: &World, platform: &mut dyn Platform) {
    let (score, alive) = current_score(world);
    let text = format!("Score: {}", score);
    let width = platform.measure_text_width(&text, SCORE_SIZE);
    let x = platform.screen_width() - width - MARGIN;
    platform.draw_text(&text, x, 10, SCORE_SIZE, Color::WHITE);

    if !alive {
        let width = platform.measure_text_width(START_PROMPT, PROMPT_SIZE);
        let x = (platform.screen_width() - width) / 2;
        let y = (platform.screen_height() - PROMPT_SIZE) / 2;
        platform.draw_text(START_PROMPT, x, y, PROMPT_SIZE, Color::ORANGE);
    }
}

#[derive(Debug, Default)]
pub struct GameStateSystem {
    hud: Option<Entity>,
}

impl GameStateSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hud(&self) -> Option<Entity> {
        self.hud
    }
}

impl GameSystem for GameStateSystem {
    fn name(&self) -> &'static str {
        "gamestate"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        self.hud = Some(ctx.world.create(Drawable::new(draw_hud, ZIndex::HUD)));
        Ok(())
    }
}
