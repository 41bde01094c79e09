use bevy_ecs::prelude::Component;

/// Tags an entity as a collectible apple.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Apple;
