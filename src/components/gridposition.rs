//! Cell coordinate on the occupancy grid.

use bevy_ecs::prelude::Component;

use crate::components::direction::Direction;

/// `(column, row)` cell on the grid.
///
/// Values may temporarily fall outside the grid (one step past an edge);
/// [`GridIndex::sanitize`](crate::resources::gridindex::GridIndex::sanitize)
/// wraps them back in.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub column: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(column: i32, row: i32) -> Self {
        GridPosition { column, row }
    }

    /// The cell `distance` steps away in `direction`. Rows grow downwards.
    ///
    /// [`Direction::Unknown`] does not move.
    pub fn step(self, direction: Direction, distance: i32) -> GridPosition {
        let (dc, dr) = direction.delta();
        GridPosition {
            column: self.column + dc * distance,
            row: self.row + dr * distance,
        }
    }
}
