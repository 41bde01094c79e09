//! Collision signal.
//!
//! Published by the snake system when the head moves into a cell held by
//! another entity. Collisions are derived from the grid index alone: the
//! entity that was displaced from the destination cell is the `entity`, the
//! snake is the `collider`.

use bevy_ecs::prelude::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCollisionSignal {
    /// The entity that occupied the destination cell.
    pub entity: Entity,
    /// The entity that moved into it.
    pub collider: Entity,
}
