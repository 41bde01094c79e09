//! Entity store operations over the ECS [`World`].
//!
//! The world owns entity identities and their fragments. Handles are bevy
//! [`Entity`] values (slot index plus generation), so a handle kept after
//! [`EntityStore::destroy`] never matches a later entity that reuses the slot.
//!
//! Fragments are plain [`Component`]s. An entity holds at most one fragment of
//! each kind; attaching a kind it already has replaces the old value.

use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;

use crate::error::{GameError, GameResult};

/// Create/destroy/attach/get/query contract of the entity store.
pub trait EntityStore {
    /// Create a new entity carrying `fragments`.
    fn create<B: Bundle>(&mut self, fragments: B) -> Entity;

    /// Destroy `entity`. Returns `false` if it was already dead.
    fn destroy(&mut self, entity: Entity) -> bool;

    /// Whether `entity` is alive.
    fn is_alive(&self, entity: Entity) -> bool;

    /// Attach `fragment`, replacing any fragment of the same kind.
    fn attach<C: Component>(&mut self, entity: Entity, fragment: C) -> GameResult<()>;

    /// Read the fragment of kind `C`.
    fn fragment<C: Component>(&self, entity: Entity) -> GameResult<&C>;

    /// Whether `entity` is alive and carries a fragment of kind `C`.
    fn has<C: Component>(&self, entity: Entity) -> bool;

    /// Entities matching the filter `F`, in creation order.
    ///
    /// `F` is any query filter, e.g. `With<Apple>` or
    /// `(With<Snake>, With<GridPosition>)`.
    fn matching<F: QueryFilter>(&mut self) -> Vec<Entity>;
}

impl EntityStore for World {
    fn create<B: Bundle>(&mut self, fragments: B) -> Entity {
        self.spawn(fragments).id()
    }

    fn destroy(&mut self, entity: Entity) -> bool {
        self.try_despawn(entity).is_ok()
    }

    fn is_alive(&self, entity: Entity) -> bool {
        self.get_entity(entity).is_ok()
    }

    fn attach<C: Component>(&mut self, entity: Entity, fragment: C) -> GameResult<()> {
        let mut entity_mut = self
            .get_entity_mut(entity)
            .map_err(|_| GameError::EntityNotFound(entity))?;
        entity_mut.insert(fragment);
        Ok(())
    }

    fn fragment<C: Component>(&self, entity: Entity) -> GameResult<&C> {
        if self.get_entity(entity).is_err() {
            return Err(GameError::EntityNotFound(entity));
        }
        self.get::<C>(entity).ok_or(GameError::FragmentNotFound {
            entity,
            fragment: std::any::type_name::<C>(),
        })
    }

    fn has<C: Component>(&self, entity: Entity) -> bool {
        self.get::<C>(entity).is_some()
    }

    fn matching<F: QueryFilter>(&mut self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = {
            let mut q = self.query_filtered::<Entity, F>();
            q.iter(self).collect()
        };
        // Archetype iteration order is not creation order, and `Entity`'s own
        // `Ord` does not follow the slot index either.
        entities.sort_by_key(|e| e.index());
        entities
    }
}
