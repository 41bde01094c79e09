//! Mondo Snake simulation core.
//!
//! A grid snake game built on an ECS world:
//! - **bevy_ecs** stores entities and their fragments
//! - a type-keyed signal bus carries input and collision signals between
//!   systems
//! - a wrap-around occupancy grid doubles as the collision detector
//!
//! The host window, keyboard, clock and renderer are reached through the
//! [`platform`] traits. A raylib implementation sits behind the `raylib`
//! feature; [`platform::headless`] runs everything in memory.
//!
//! # Project Structure
//!
//! - [`components`] – fragments (grid position, direction, snake, apple, drawable)
//! - [`events`] – signal payloads and their handlers
//! - [`resources`] – grid index, signal bus, config, time, bindings
//! - [`systems`] – one [`scheduler::GameSystem`] per concern
//! - [`game`] – default wiring and the frame loop

pub mod components;
pub mod context;
pub mod entitystore;
pub mod error;
pub mod events;
pub mod game;
pub mod platform;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use context::GameContext;
pub use entitystore::EntityStore;
pub use error::{GameError, GameResult};
pub use game::Game;
