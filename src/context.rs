//! Per-frame context handed to systems and signal handlers.

use bevy_ecs::prelude::*;
use log::trace;

use crate::error::GameResult;
use crate::platform::Platform;
use crate::resources::signalbus::SignalBus;
use crate::resources::worldtime::WorldTime;

/// Mutable access to the world plus the host platform for one frame.
///
/// Systems and signal handlers receive this instead of globals. The signal
/// bus lives in the world as a non-send resource, so anything holding a
/// context can publish or subscribe.
pub struct GameContext<'a> {
    pub world: &'a mut World,
    pub platform: &'a mut dyn Platform,
}

impl<'a> GameContext<'a> {
    pub fn new(world: &'a mut World, platform: &'a mut dyn Platform) -> Self {
        GameContext { world, platform }
    }

    /// Scaled seconds since the previous frame, as stored by the clock system.
    pub fn delta(&self) -> f32 {
        self.world
            .get_resource::<WorldTime>()
            .map(|t| t.delta)
            .unwrap_or(0.0)
    }

    /// Register `handler` for signals of type `S`.
    ///
    /// Handlers run in subscription order. A subscription made while a
    /// signal is being delivered takes effect from the next publish.
    pub fn subscribe<S: 'static>(
        &mut self,
        handler: impl Fn(&S, &mut GameContext<'_>) -> GameResult<()> + 'static,
    ) {
        if self.world.get_non_send_resource::<SignalBus>().is_none() {
            self.world.insert_non_send_resource(SignalBus::default());
        }
        self.world
            .non_send_resource_mut::<SignalBus>()
            .subscribe(handler);
    }

    /// Deliver `signal` to every handler registered for `S`, in order.
    ///
    /// Each handler finishes before the next starts. The first failing
    /// handler aborts delivery and its error is returned. No subscribers is
    /// a no-op.
    pub fn publish<S: 'static>(&mut self, signal: S) -> GameResult<()> {
        let handlers = match self.world.get_non_send_resource::<SignalBus>() {
            Some(bus) => bus.handlers::<S>(),
            None => return Ok(()),
        };
        trace!(
            "Publishing {} to {} handler(s)",
            std::any::type_name::<S>(),
            handlers.len()
        );
        for handler in handlers {
            (*handler)(&signal, self)?;
        }
        Ok(())
    }
}
