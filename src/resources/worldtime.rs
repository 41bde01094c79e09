//! Frame timing resource.
//!
//! Written once per frame by the clock system; read by every system that
//! accumulates time (snake tick pacing, apple spawn interval, fps overlay).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since the game started.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Frames per second implied by the last delta, 0 before the first frame.
    pub fn fps(&self) -> u32 {
        if self.delta > 0.0 {
            (self.time_scale / self.delta).round() as u32
        } else {
            0
        }
    }
}
