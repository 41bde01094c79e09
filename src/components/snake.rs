//! Snake marker and score.

use bevy_ecs::prelude::Component;

/// Marks the player-controlled snake and carries its score.
///
/// Every cell the snake occupies on the grid points at the entity holding
/// this component, so a displaced occupant carrying `Snake` means the head
/// ran into the body.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    pub apples_eaten: u32,
}
