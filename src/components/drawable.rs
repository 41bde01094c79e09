//! Render intent component.
//!
//! A [`Drawable`] pairs a draw callback with a [`ZIndex`]. Once per frame the
//! draw dispatcher ([`crate::systems::render`]) collects every drawable,
//! orders them by z-index and invokes each callback with its owning entity.
//! Callers never order their drawing by hand: the board sits at
//! [`ZIndex::BOARD`], game objects at [`ZIndex::OBJECTS`] and text at
//! [`ZIndex::HUD`].

use bevy_ecs::prelude::*;

use crate::components::zindex::ZIndex;
use crate::platform::Platform;

/// Draw callback: owning entity, read-only world, and the host renderer.
pub type DrawFn = fn(Entity, &World, &mut dyn Platform);

#[derive(Component, Clone, Copy)]
pub struct Drawable {
    pub draw: DrawFn,
    pub z_index: ZIndex,
}

impl Drawable {
    pub fn new(draw: DrawFn, z_index: ZIndex) -> Self {
        Drawable { draw, z_index }
    }
}

impl std::fmt::Debug for Drawable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawable")
            .field("z_index", &self.z_index)
            .finish_non_exhaustive()
    }
}
