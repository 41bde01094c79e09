//! Apple spawner and system.
//!
//! Keeps a capped population of apples on the board. One apple is spawned
//! when the system initializes; after that a new one appears every
//! `spawn_interval` seconds while fewer than `max_apples` are alive. An
//! eaten apple is destroyed as soon as its [`EntityCollisionSignal`] arrives,
//! and if that leaves the board without apples a replacement is spawned right
//! away instead of waiting for the timer.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::apple::Apple;
use crate::components::drawable::Drawable;
use crate::components::gridposition::GridPosition;
use crate::components::zindex::ZIndex;
use crate::context::GameContext;
use crate::entitystore::EntityStore;
use crate::error::{GameError, GameResult};
use crate::events::collision::EntityCollisionSignal;
use crate::platform::{Color, Platform};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gridindex::GridIndex;
use crate::scheduler::GameSystem;
use crate::systems::gridmap::draw_tile;

const APPLE_COLOR: Color = Color::GREEN;

#[derive(Resource, Debug)]
pub struct AppleSpawner {
    apples: Vec<Entity>,
    time_passed: f32,
    max_apples: usize,
    spawn_interval: f32,
    spawn_padding: i32,
}

impl Default for AppleSpawner {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl AppleSpawner {
    pub fn new(max_apples: usize, spawn_interval: f32, spawn_padding: i32) -> Self {
        AppleSpawner {
            apples: Vec::new(),
            time_passed: 0.0,
            max_apples,
            spawn_interval,
            spawn_padding,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_apples,
            config.apple_spawn_interval,
            config.apple_spawn_padding,
        )
    }

    /// Live apples, oldest first.
    pub fn apples(&self) -> &[Entity] {
        &self.apples
    }

    pub fn len(&self) -> usize {
        self.apples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apples.is_empty()
    }

    pub fn max_apples(&self) -> usize {
        self.max_apples
    }

    pub fn is_full(&self) -> bool {
        self.apples.len() >= self.max_apples
    }

    /// Place a new apple on a random empty cell inside the padded region and
    /// restart the spawn timer.
    pub fn spawn(&mut self, world: &mut World) -> GameResult<Entity> {
        let entity = Self::create_entity(world);
        let taken = match world.get_resource_mut::<GridIndex>() {
            Some(mut grid) => grid.take_empty_cell(entity, self.spawn_padding),
            None => Err(GameError::MissingResource("GridIndex")),
        };
        match taken {
            Ok(position) => self.track(world, entity, position),
            Err(e) => {
                world.destroy(entity);
                Err(e)
            }
        }
    }

    /// Place a new apple at `position`, overwriting the cell's occupant
    /// reference.
    pub fn spawn_at(&mut self, world: &mut World, position: GridPosition) -> GameResult<Entity> {
        if !world.contains_resource::<GridIndex>() {
            return Err(GameError::MissingResource("GridIndex"));
        }
        let entity = Self::create_entity(world);
        let position = world
            .resource_mut::<GridIndex>()
            .add_entity(entity, position);
        self.track(world, entity, position)
    }

    fn create_entity(world: &mut World) -> Entity {
        world.create((Apple, Drawable::new(draw_apple, ZIndex::OBJECTS)))
    }

    fn track(&mut self, world: &mut World, entity: Entity, position: GridPosition) -> GameResult<Entity> {
        world.attach(entity, position)?;
        self.apples.push(entity);
        self.time_passed = 0.0;
        info!(
            "Apple {} spawned at ({}, {}), {} on board",
            entity,
            position.column,
            position.row,
            self.apples.len()
        );
        Ok(entity)
    }

    /// Forget and destroy `entity`.
    ///
    /// Its grid cell is cleared only if it still points at the apple (an eaten
    /// apple's cell already belongs to the snake). Returns whether the apple
    /// was tracked by this spawner.
    pub fn despawn(&mut self, world: &mut World, entity: Entity) -> bool {
        let tracked = match self.apples.iter().position(|e| *e == entity) {
            Some(index) => {
                self.apples.remove(index);
                true
            }
            None => false,
        };
        if let Ok(position) = world.fragment::<GridPosition>(entity).copied() {
            if let Some(mut grid) = world.get_resource_mut::<GridIndex>() {
                if grid.get_entity(position) == Some(entity) {
                    grid.remove_entity(position);
                }
            }
        }
        world.destroy(entity);
        tracked
    }

    /// Accumulate `dt` while below the cap. Returns `true` when the interval
    /// has elapsed.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_full() {
            return false;
        }
        self.time_passed += dt;
        self.time_passed >= self.spawn_interval
    }
}

fn draw_apple(entity: Entity, world: &World, platform: &mut dyn Platform) {
    let (Some(grid), Some(position)) = (
        world.get_resource::<GridIndex>(),
        world.get::<GridPosition>(entity),
    ) else {
        return;
    };
    draw_tile(grid, platform, *position, APPLE_COLOR);
}

/// Destroy eaten apples and refill an empty board at once.
fn on_collision(signal: &EntityCollisionSignal, ctx: &mut GameContext<'_>) -> GameResult<()> {
    if !ctx.world.has::<Apple>(signal.entity) || !ctx.world.contains_resource::<AppleSpawner>() {
        return Ok(());
    }
    ctx.world
        .resource_scope(|world, mut spawner: Mut<AppleSpawner>| -> GameResult<()> {
            debug!("Apple {} eaten by {}", signal.entity, signal.collider);
            spawner.despawn(world, signal.entity);
            if spawner.is_empty() && !spawner.is_full() {
                spawner.spawn(world)?;
            }
            Ok(())
        })
}

#[derive(Debug, Default)]
pub struct AppleSystem;

impl GameSystem for AppleSystem {
    fn name(&self) -> &'static str {
        "apples"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<AppleSpawner>() {
            let spawner = ctx
                .world
                .get_resource::<GameConfig>()
                .map(AppleSpawner::from_config)
                .unwrap_or_default();
            ctx.world.insert_resource(spawner);
        }
        ctx.world
            .resource_scope(|world, mut spawner: Mut<AppleSpawner>| -> GameResult<()> {
                if !spawner.is_full() {
                    spawner.spawn(world)?;
                }
                Ok(())
            })?;
        ctx.subscribe(on_collision);
        Ok(())
    }

    fn update(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<AppleSpawner>() {
            return Err(GameError::MissingResource("AppleSpawner"));
        }
        let dt = ctx.delta();
        ctx.world
            .resource_scope(|world, mut spawner: Mut<AppleSpawner>| -> GameResult<()> {
                if spawner.advance(dt) {
                    spawner.spawn(world)?;
                }
                Ok(())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::HeadlessPlatform;
    use crate::resources::signalbus::SignalBus;

    fn setup() -> World {
        let mut world = World::new();
        world.insert_resource(GridIndex::new(40, 24, 20, fastrand::Rng::with_seed(11)).unwrap());
        world.insert_non_send_resource(SignalBus::new());
        world
    }

    #[test]
    fn spawn_places_apple_inside_padding() {
        let mut world = setup();
        let mut spawner = AppleSpawner::new(3, 1.0, 4);
        let apple = spawner.spawn(&mut world).unwrap();
        let position = *world.fragment::<GridPosition>(apple).unwrap();
        assert!((4..36).contains(&position.column));
        assert!((4..20).contains(&position.row));
        assert_eq!(
            world.resource::<GridIndex>().get_entity(position),
            Some(apple)
        );
        assert_eq!(spawner.apples(), &[apple]);
    }

    #[test]
    fn timer_only_runs_below_the_cap() {
        let mut spawner = AppleSpawner::new(1, 2.0, 4);
        assert!(!spawner.advance(1.5));
        assert!(spawner.advance(1.0));

        let mut world = setup();
        spawner.spawn(&mut world).unwrap();
        assert!(spawner.is_full());
        assert!(!spawner.advance(100.0));
    }

    #[test]
    fn despawn_leaves_cells_owned_by_others() {
        let mut world = setup();
        let mut spawner = AppleSpawner::new(2, 1.0, 4);
        let apple = spawner.spawn_at(&mut world, GridPosition::new(3, 3)).unwrap();
        let other = world.spawn_empty().id();
        world
            .resource_mut::<GridIndex>()
            .add_entity(other, GridPosition::new(3, 3));
        assert!(spawner.despawn(&mut world, apple));
        assert!(!world.is_alive(apple));
        assert!(spawner.is_empty());
        assert_eq!(
            world.resource::<GridIndex>().get_entity(GridPosition::new(3, 3)),
            Some(other)
        );
    }

    #[test]
    fn eaten_last_apple_is_replaced_immediately() {
        let mut world = setup();
        let mut platform = HeadlessPlatform::new(800, 480);
        world.insert_resource(AppleSpawner::new(1, 8.0, 4));
        let mut system = AppleSystem;
        let mut ctx = GameContext::new(&mut world, &mut platform);
        system.initialize(&mut ctx).unwrap();
        let first = ctx.world.resource::<AppleSpawner>().apples()[0];
        let snake = ctx.world.spawn_empty().id();

        ctx.publish(EntityCollisionSignal {
            entity: first,
            collider: snake,
        })
        .unwrap();

        assert!(!ctx.world.is_alive(first));
        let spawner = ctx.world.resource::<AppleSpawner>();
        assert_eq!(spawner.len(), 1);
        assert_ne!(spawner.apples()[0], first);
    }

    #[test]
    fn collisions_with_non_apples_are_ignored() {
        let mut world = setup();
        let mut platform = HeadlessPlatform::new(800, 480);
        world.insert_resource(AppleSpawner::new(1, 8.0, 4));
        let mut ctx = GameContext::new(&mut world, &mut platform);
        AppleSystem.initialize(&mut ctx).unwrap();
        let bystander = ctx.world.spawn_empty().id();
        ctx.publish(EntityCollisionSignal {
            entity: bystander,
            collider: bystander,
        })
        .unwrap();
        assert!(ctx.world.is_alive(bystander));
        assert_eq!(ctx.world.resource::<AppleSpawner>().len(), 1);
    }
}
