//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay (fps and
//! entity count). Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the UI pass draws diagnostics.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugMode;
