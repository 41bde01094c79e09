//! Game systems.
//!
//! Each system implements [`GameSystem`](crate::scheduler::GameSystem) and is
//! run by the [`Scheduler`](crate::scheduler::Scheduler) in this order:
//!
//! - [`time`] – store the frame delta in [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`input`] – publish pressed and held keys, wire the window toggles
//! - [`gridmap`] – size the grid index and draw the board
//! - [`snake`] – spawn, steer, tick and reset the snake
//! - [`apple`] – keep the board stocked with apples
//! - [`gamestate`] – score and start prompt
//! - [`render`] – draw every drawable by z-order, plus the debug overlay

pub mod apple;
pub mod gamestate;
pub mod gridmap;
pub mod input;
pub mod render;
pub mod snake;
pub mod time;
