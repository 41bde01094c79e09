//! Error type shared by the simulation core.
//!
//! Most failures here are recovered locally by callers (existence checks
//! before access). The ones that escape a frame are programming-time
//! invariant violations, such as a grid too small for the requested padding.

use bevy_ecs::prelude::Entity;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the entity store, grid index, systems and signal handlers.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The handle does not name a live entity (never created or destroyed).
    #[error("entity not found: {0}")]
    EntityNotFound(Entity),

    /// The entity is alive but carries no fragment of the requested kind.
    #[error("entity {entity} has no {fragment} fragment")]
    FragmentNotFound {
        /// The entity that was dereferenced.
        entity: Entity,
        /// Type name of the missing fragment.
        fragment: &'static str,
    },

    /// No empty cell is left inside the padded region of the grid.
    #[error("no empty cell within padding {padding} of a {columns}x{rows} grid")]
    CapacityExhausted {
        columns: i32,
        rows: i32,
        padding: i32,
    },

    /// The playfield divides into zero cells on some axis.
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidGrid { columns: i32, rows: i32 },

    /// A system ran before the resource it needs was initialised.
    #[error("missing resource: {0}")]
    MissingResource(&'static str),

    /// Configuration could not be read or written.
    #[error("config error: {0}")]
    Config(String),

    /// A signal handler failed; delivery of the current publish stops here.
    #[error("signal handler failed: {0}")]
    Handler(String),
}
