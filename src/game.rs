//! Game wiring and frame loop.
//!
//! [`Game`] owns the ECS world and the [`Scheduler`]. It inserts the shared
//! resources, registers the default systems in their run order and drives one
//! frame at a time against a [`Platform`]:
//!
//! 1. `begin_frame` on the platform
//! 2. Update across all systems (clock first, so every system sees this
//!    frame's delta)
//! 3. Draw, then DrawUI
//! 4. `end_frame`
//!
//! Update always finishes before Draw starts, so what is drawn reflects this
//! frame's logic.

use bevy_ecs::prelude::*;
use log::info;

use crate::context::GameContext;
use crate::error::GameResult;
use crate::platform::{Color, Platform};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputBindings;
use crate::resources::signalbus::SignalBus;
use crate::resources::worldtime::WorldTime;
use crate::scheduler::Scheduler;
use crate::systems::apple::{AppleSpawner, AppleSystem};
use crate::systems::gamestate::GameStateSystem;
use crate::systems::gridmap::GridSystem;
use crate::systems::input::InputSystem;
use crate::systems::render::DrawSystem;
use crate::systems::snake::{SnakeController, SnakeSystem};
use crate::systems::time::ClockSystem;

/// Systems in their default run order.
pub fn default_scheduler() -> Scheduler {
    Scheduler::new()
        .with_system(ClockSystem)
        .with_system(InputSystem::new())
        .with_system(GridSystem::new())
        .with_system(SnakeSystem)
        .with_system(AppleSystem)
        .with_system(GameStateSystem::new())
        .with_system(DrawSystem)
}

pub struct Game {
    world: World,
    scheduler: Scheduler,
    initialized: bool,
}

impl Game {
    /// Game with the default systems.
    pub fn new(config: GameConfig) -> Self {
        Self::with_scheduler(config, default_scheduler())
    }

    /// Game running `scheduler` instead of the default systems.
    pub fn with_scheduler(config: GameConfig, scheduler: Scheduler) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputBindings::default());
        world.insert_resource(SnakeController::from_config(&config));
        world.insert_resource(AppleSpawner::from_config(&config));
        world.insert_resource(config);
        world.insert_non_send_resource(SignalBus::new());
        Game {
            world,
            scheduler,
            initialized: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Context over this game's world, for driving signals from outside a
    /// frame.
    pub fn context<'a>(&'a mut self, platform: &'a mut dyn Platform) -> GameContext<'a> {
        GameContext::new(&mut self.world, platform)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run every system's Initialize hook once, in order.
    pub fn initialize(&mut self, platform: &mut dyn Platform) -> GameResult<()> {
        if self.initialized {
            return Ok(());
        }
        let mut ctx = GameContext::new(&mut self.world, platform);
        self.scheduler.initialize(&mut ctx)?;
        self.initialized = true;
        info!("Game initialized with {} systems", self.scheduler.len());
        Ok(())
    }

    /// Run one frame. Initializes first if needed.
    pub fn frame(&mut self, platform: &mut dyn Platform) -> GameResult<()> {
        self.initialize(platform)?;
        platform.begin_frame(Color::BLACK);
        let result = self.run_hooks(platform);
        platform.end_frame();
        result
    }

    fn run_hooks(&mut self, platform: &mut dyn Platform) -> GameResult<()> {
        let mut ctx = GameContext::new(&mut self.world, platform);
        self.scheduler.update(&mut ctx)?;
        self.scheduler.draw(&mut ctx)?;
        self.scheduler.draw_ui(&mut ctx)
    }

    /// Run frames until the window asks to close.
    pub fn run(&mut self, platform: &mut dyn Platform) -> GameResult<()> {
        self.initialize(platform)?;
        while !platform.window_should_close() {
            self.frame(platform)?;
        }
        info!("Window closed, leaving game loop");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessPlatform;

    #[test]
    fn default_order_starts_with_clock_and_ends_with_draw() {
        let game = Game::new(GameConfig::new());
        assert_eq!(
            game.scheduler().names(),
            vec!["clock", "input", "grid", "snake", "apples", "gamestate", "draw"]
        );
    }

    #[test]
    fn run_stops_when_the_window_closes() {
        let mut game = Game::new(GameConfig::new());
        let mut platform = HeadlessPlatform::new(800, 480);
        platform.close_after(3);
        game.run(&mut platform).unwrap();
        assert!(game.is_initialized());
        assert_eq!(game.world().resource::<WorldTime>().frame_count, 3);
    }
}
