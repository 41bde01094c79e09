//! Occupancy grid over the playfield.
//!
//! [`GridIndex`] is a dense `columns x rows` table mapping each cell to the
//! entity occupying it, if any. Coordinates wrap around each edge (the
//! playfield is a torus): any column or row at or past the dimension becomes
//! 0, anything below 0 becomes `dimension - 1`.
//!
//! [`GridIndex::move_entity`] is the only collision primitive. Game logic never
//! checks for overlap separately; it moves and looks at what was displaced.
//!
//! The table is sized once when the grid system initialises and is never
//! resized mid-game. It is not safe to scan it while another move is applied
//! to the same table; the single-threaded frame loop guarantees that.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::gridposition::GridPosition;
use crate::error::{GameError, GameResult};

#[derive(Resource, Debug)]
pub struct GridIndex {
    columns: i32,
    rows: i32,
    cell_size: i32,
    tile_size: i32,
    cells: Vec<Option<Entity>>,
    rng: fastrand::Rng,
}

impl GridIndex {
    /// Empty grid of `columns x rows` cells.
    ///
    /// `cell_size` is the pixel pitch between cells; tiles are drawn
    /// `cell_size` wide until [`with_tile_size`](Self::with_tile_size) says
    /// otherwise.
    pub fn new(columns: i32, rows: i32, cell_size: i32, rng: fastrand::Rng) -> GameResult<Self> {
        if columns <= 0 || rows <= 0 {
            return Err(GameError::InvalidGrid { columns, rows });
        }
        Ok(GridIndex {
            columns,
            rows,
            cell_size,
            tile_size: cell_size,
            cells: vec![None; (columns * rows) as usize],
            rng,
        })
    }

    /// Grid covering a `width x height` pixel playfield.
    pub fn from_screen(
        width: i32,
        height: i32,
        cell_size: i32,
        rng: fastrand::Rng,
    ) -> GameResult<Self> {
        if cell_size <= 0 {
            return Err(GameError::InvalidGrid {
                columns: 0,
                rows: 0,
            });
        }
        Self::new(width / cell_size, height / cell_size, cell_size, rng)
    }

    pub fn with_tile_size(mut self, tile_size: i32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Wrap `position` into the grid, each axis independently.
    pub fn sanitize(&self, position: GridPosition) -> GridPosition {
        GridPosition {
            column: wrap_axis(position.column, self.columns),
            row: wrap_axis(position.row, self.rows),
        }
    }

    fn slot(&self, position: GridPosition) -> usize {
        let p = self.sanitize(position);
        (p.row * self.columns + p.column) as usize
    }

    /// Occupant of the (wrapped) cell.
    pub fn get_entity(&self, position: GridPosition) -> Option<Entity> {
        self.cells[self.slot(position)]
    }

    pub fn is_empty(&self, position: GridPosition) -> bool {
        self.get_entity(position).is_none()
    }

    /// Occupy the cell with `entity`, overwriting any previous occupant
    /// reference. The previous occupant is not destroyed.
    pub fn add_entity(&mut self, entity: Entity, position: GridPosition) -> GridPosition {
        let position = self.sanitize(position);
        let slot = self.slot(position);
        self.cells[slot] = Some(entity);
        position
    }

    /// Clear the cell.
    pub fn remove_entity(&mut self, position: GridPosition) {
        let slot = self.slot(position);
        self.cells[slot] = None;
    }

    /// Move the occupant of `from` into `to`.
    ///
    /// `to` is wrapped first. Returns the wrapped destination and whatever
    /// occupied it before the move. `from` ends up empty.
    pub fn move_entity(
        &mut self,
        from: GridPosition,
        to: GridPosition,
    ) -> (GridPosition, Option<Entity>) {
        let to = self.sanitize(to);
        let from_slot = self.slot(from);
        let to_slot = self.slot(to);
        let mover = self.cells[from_slot];
        let displaced = self.cells[to_slot];
        if from_slot == to_slot {
            return (to, displaced);
        }
        self.cells[to_slot] = mover;
        self.cells[from_slot] = None;
        (to, displaced)
    }

    /// Pick a random empty cell within `padding` of every edge, give it to
    /// `owner` and return it.
    ///
    /// Fails with [`GameError::CapacityExhausted`] when the padded region has
    /// no free cell.
    pub fn take_empty_cell(&mut self, owner: Entity, padding: i32) -> GameResult<GridPosition> {
        let (col_lo, col_hi) = (padding, self.columns - padding);
        let (row_lo, row_hi) = (padding, self.rows - padding);
        let exhausted = GameError::CapacityExhausted {
            columns: self.columns,
            rows: self.rows,
            padding,
        };
        if padding < 0 || col_lo >= col_hi || row_lo >= row_hi {
            return Err(exhausted);
        }
        let has_room = (row_lo..row_hi)
            .any(|row| (col_lo..col_hi).any(|column| self.is_empty(GridPosition::new(column, row))));
        if !has_room {
            return Err(exhausted);
        }
        loop {
            let candidate = GridPosition {
                column: self.rng.i32(col_lo..col_hi),
                row: self.rng.i32(row_lo..row_hi),
            };
            if self.is_empty(candidate) {
                debug!(
                    "Cell ({}, {}) taken by {}",
                    candidate.column, candidate.row, owner
                );
                return Ok(self.add_entity(owner, candidate));
            }
        }
    }

    /// Every cell occupied by `entity`, scanning the full table row by row.
    ///
    /// O(columns x rows). Not meant to run per segment per frame.
    pub fn entities_with_id(&self, entity: Entity) -> Vec<(Entity, GridPosition)> {
        let mut found = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let position = GridPosition::new(column, row);
                if self.get_entity(position) == Some(entity) {
                    found.push((entity, position));
                }
            }
        }
        found
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Top-left pixel of the cell.
    pub fn to_screen(&self, position: GridPosition) -> (i32, i32) {
        (
            position.column * self.cell_size,
            position.row * self.cell_size,
        )
    }
}

fn wrap_axis(value: i32, dimension: i32) -> i32 {
    if value >= dimension {
        0
    } else if value < 0 {
        dimension - 1
    } else {
        value
    }
}
