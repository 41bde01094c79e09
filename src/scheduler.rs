//! System scheduler.
//!
//! A [`GameSystem`] implements any of four lifecycle hooks; the ones it
//! leaves out are no-ops. The [`Scheduler`] holds systems in insertion order
//! and runs one hook across all of them at a time:
//!
//! - `initialize` once at startup
//! - `update`, then `draw`, then `draw_ui` every frame
//!
//! Each call finishes before the next system's starts, so a later system may
//! rely on side effects of an earlier one (the grid index built by the grid
//! system's `initialize` is used by the snake's). The first error stops the
//! hook and is returned to the caller.

use log::info;

use crate::context::GameContext;
use crate::error::GameResult;

/// A unit of game logic driven by the [`Scheduler`].
pub trait GameSystem {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    fn initialize(&mut self, _ctx: &mut GameContext<'_>) -> GameResult<()> {
        Ok(())
    }

    fn update(&mut self, _ctx: &mut GameContext<'_>) -> GameResult<()> {
        Ok(())
    }

    fn draw(&mut self, _ctx: &mut GameContext<'_>) -> GameResult<()> {
        Ok(())
    }

    fn draw_ui(&mut self, _ctx: &mut GameContext<'_>) -> GameResult<()> {
        Ok(())
    }
}

/// Ordered list of systems. Holds no game logic.
#[derive(Default)]
pub struct Scheduler {
    systems: Vec<Box<dyn GameSystem>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `system` to the end of the run order.
    pub fn add_system(&mut self, system: impl GameSystem + 'static) -> &mut Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn with_system(mut self, system: impl GameSystem + 'static) -> Self {
        self.add_system(system);
        self
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// System names in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    pub fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        for system in self.systems.iter_mut() {
            info!("Initializing system {}", system.name());
            system.initialize(ctx)?;
        }
        Ok(())
    }

    pub fn update(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        for system in self.systems.iter_mut() {
            system.update(ctx)?;
        }
        Ok(())
    }

    pub fn draw(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        for system in self.systems.iter_mut() {
            system.draw(ctx)?;
        }
        Ok(())
    }

    pub fn draw_ui(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        for system in self.systems.iter_mut() {
            system.draw_ui(ctx)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("systems", &self.names())
            .finish()
    }
}
