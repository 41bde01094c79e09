//! Fragments attached to entities.
//!
//! Each type here is an ECS component: plain data, at most one per kind on an
//! entity.
//!
//! Submodules overview:
//! - [`apple`] – marker for collectible items
//! - [`direction`] – facing of a moving entity, plus reversal rules
//! - [`drawable`] – render intent: draw callback and z-order
//! - [`gridposition`] – cell coordinate on the occupancy grid
//! - [`snake`] – marker and score for the player-controlled snake
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod apple;
pub mod direction;
pub mod drawable;
pub mod gridposition;
pub mod snake;
pub mod zindex;
