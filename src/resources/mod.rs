//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`debugmode`] – marker resource enabling the debug overlay
//! - [`gameconfig`] – configuration loaded from an INI file
//! - [`gridindex`] – occupancy grid with wrap-around and random placement
//! - [`input`] – key to action bindings
//! - [`signalbus`] – type-indexed publish/subscribe handler registry
//! - [`worldtime`] – frame delta, elapsed time and frame count

pub mod debugmode;
pub mod gameconfig;
pub mod gridindex;
pub mod input;
pub mod signalbus;
pub mod worldtime;
