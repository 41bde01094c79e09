//! Signal types published on the [`SignalBus`](crate::resources::signalbus::SignalBus).
//!
//! Submodules overview:
//! - [`collision`] – the snake head moved into an occupied cell
//! - [`input`] – logical input actions and raw key signals
//! - [`switchdebug`] – toggle the debug overlay
//! - [`switchfullscreen`] – toggle borderless fullscreen

pub mod collision;
pub mod input;
pub mod switchdebug;
pub mod switchfullscreen;
