//! Type-indexed publish/subscribe registry.
//!
//! The [`SignalBus`] decouples producers (input capture, the snake's collision
//! resolution) from consumers (game systems). Each signal type is its own
//! key: a handler registered for `KeyPressedSignal` never sees an
//! `EntityCollisionSignal`. Registration is explicit and static, done by each
//! system in its Initialize hook.
//!
//! The bus only stores handlers. Delivery goes through
//! [`GameContext::publish`](crate::context::GameContext::publish), which
//! snapshots the handler list first so handlers may themselves publish or
//! subscribe.
//!
//! Handlers hold `Rc`s, so the bus is inserted as a non-send resource.

use std::any::{Any, TypeId};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::context::GameContext;
use crate::error::GameResult;

/// A registered handler for signals of type `S`.
pub type SignalHandler<S> = Rc<dyn Fn(&S, &mut GameContext<'_>) -> GameResult<()>>;

#[derive(Default)]
pub struct SignalBus {
    // TypeId::of::<S>() -> Vec<SignalHandler<S>>
    handlers: FxHashMap<TypeId, Box<dyn Any>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the subscribers of `S`.
    pub fn subscribe<S: 'static>(
        &mut self,
        handler: impl Fn(&S, &mut GameContext<'_>) -> GameResult<()> + 'static,
    ) {
        let handler: SignalHandler<S> = Rc::new(handler);
        let slot = self
            .handlers
            .entry(TypeId::of::<S>())
            .or_insert_with(|| Box::new(Vec::<SignalHandler<S>>::new()));
        if let Some(list) = slot.downcast_mut::<Vec<SignalHandler<S>>>() {
            list.push(handler);
        }
    }

    /// Snapshot of the handlers registered for `S`, in subscription order.
    pub fn handlers<S: 'static>(&self) -> Vec<SignalHandler<S>> {
        self.handlers
            .get(&TypeId::of::<S>())
            .and_then(|slot| slot.downcast_ref::<Vec<SignalHandler<S>>>())
            .cloned()
            .unwrap_or_default()
    }

    pub fn subscriber_count<S: 'static>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<S>())
            .and_then(|slot| slot.downcast_ref::<Vec<SignalHandler<S>>>())
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBus")
            .field("signal_types", &self.handlers.len())
            .finish()
    }
}
