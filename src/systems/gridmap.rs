//! Grid system.
//!
//! Sizes the [`GridIndex`] at initialization from the surface size and the
//! configured cell size, and owns the board drawable that paints every empty
//! cell as a dark tile underneath the game objects.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::drawable::Drawable;
use crate::components::gridposition::GridPosition;
use crate::components::zindex::ZIndex;
use crate::context::GameContext;
use crate::entitystore::EntityStore;
use crate::error::GameResult;
use crate::platform::{Color, Platform};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gridindex::GridIndex;
use crate::scheduler::GameSystem;

const BOARD_COLOR: Color = Color::from_hex(0x2E2E2EFF);

/// Paint the tile of `position`, centred inside its cell.
pub fn draw_tile(grid: &GridIndex, platform: &mut dyn Platform, position: GridPosition, color: Color) {
    let (x, y) = grid.to_screen(position);
    let inset = (grid.cell_size() - grid.tile_size()) / 2;
    platform.draw_rectangle(
        x + inset,
        y + inset,
        grid.tile_size(),
        grid.tile_size(),
        color,
    );
}

fn draw_board(_entity: Entity, world: &World, platform: &mut dyn Platform) {
    let Some(grid) = world.get_resource::<GridIndex>() else {
        return;
    };
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let position = GridPosition::new(column, row);
            if grid.is_empty(position) {
                draw_tile(grid, platform, position, BOARD_COLOR);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct GridSystem {
    board: Option<Entity>,
}

impl GridSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<Entity> {
        self.board
    }
}

impl GameSystem for GridSystem {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        let config = ctx
            .world
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let grid = GridIndex::from_screen(
            ctx.platform.screen_width(),
            ctx.platform.screen_height(),
            config.cell_size,
            rng,
        )?
        .with_tile_size(config.tile_size);
        info!(
            "Grid sized {}x{} cells of {}px (seed {:?})",
            grid.columns(),
            grid.rows(),
            grid.cell_size(),
            config.seed
        );
        ctx.world.insert_resource(grid);
        self.board = Some(ctx.world.create(Drawable::new(draw_board, ZIndex::BOARD)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawCall, HeadlessPlatform};

    #[test]
    fn initialize_sizes_grid_from_surface() {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        let mut platform = HeadlessPlatform::new(800, 480);
        let mut system = GridSystem::new();
        system
            .initialize(&mut GameContext::new(&mut world, &mut platform))
            .unwrap();
        let grid = world.resource::<GridIndex>();
        assert_eq!((grid.columns(), grid.rows()), (40, 24));
        assert_eq!(grid.tile_size(), 16);
        assert!(world.has::<Drawable>(system.board().unwrap()));
    }

    #[test]
    fn board_skips_occupied_cells() {
        let mut world = World::new();
        let mut grid = GridIndex::new(3, 2, 20, fastrand::Rng::with_seed(1))
            .unwrap()
            .with_tile_size(16);
        let occupant = world.spawn_empty().id();
        grid.add_entity(occupant, GridPosition::new(1, 1));
        world.insert_resource(grid);
        let board = world.spawn_empty().id();

        let mut platform = HeadlessPlatform::new(60, 40);
        draw_board(board, &world, &mut platform);
        assert_eq!(platform.draw_calls().len(), 5);
        assert_eq!(
            platform.draw_calls()[0],
            DrawCall::Rectangle {
                x: 2,
                y: 2,
                width: 16,
                height: 16,
                color: BOARD_COLOR
            }
        );
    }
}
