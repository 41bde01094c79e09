//! Facing direction and the no-reversal rule.

use bevy_ecs::prelude::Component;

/// Facing of a moving entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Unknown,
}

impl Direction {
    /// The four real directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Unknown => Direction::Unknown,
        }
    }

    /// `(column, row)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Unknown => (0, 0),
        }
    }

    /// Direction to apply when `next` is requested while facing `current`.
    ///
    /// An exact reversal keeps `current`; anything else is taken as is.
    pub fn sanitized(current: Direction, next: Direction) -> Direction {
        if current != Direction::Unknown && next == current.opposite() {
            current
        } else {
            next
        }
    }
}
