//! Z-index for render ordering.
//!
//! The [`ZIndex`] value of a [`Drawable`](crate::components::drawable::Drawable)
//! decides when it is painted. Lower values draw first and are painted over by
//! higher ones.

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Background layer (the board).
    pub const BOARD: ZIndex = ZIndex(-1);
    /// Game objects: snake and apples.
    pub const OBJECTS: ZIndex = ZIndex(10);
    /// Score and prompts.
    pub const HUD: ZIndex = ZIndex(999);
}
