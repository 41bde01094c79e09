//! Snake controller and system.
//!
//! The [`SnakeController`] resource owns the player's chain: the snake
//! entity, its ordered segment cells (head first), the queued direction, the
//! tick accumulator and the current speed. The whole chain is one entity; each
//! cell it covers in the [`GridIndex`] points at that entity.
//!
//! Life cycle:
//! - **Spawn** on the start action while not alive: claim a padded random
//!   empty cell for the head and lay the initial segments out behind it.
//! - **Direction change** on a steering action while alive. An exact reversal
//!   of the head direction is dropped.
//! - **Tick** when the accumulated `delta * speed` reaches one. At most one
//!   tick per update, however long the frame was.
//! - **Reset** when the head runs into the body. The controller returns to its
//!   never-spawned state and can be spawned again.
//!
//! Eating an apple grows the chain by one segment and publishes an
//! [`EntityCollisionSignal`] naming the apple. An apple buried under cells the
//! chain claims while spawning or growing is reported the same way, so the
//! apple system removes and replaces it.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::apple::Apple;
use crate::components::direction::Direction;
use crate::components::drawable::Drawable;
use crate::components::gridposition::GridPosition;
use crate::components::snake::Snake;
use crate::components::zindex::ZIndex;
use crate::context::GameContext;
use crate::entitystore::EntityStore;
use crate::error::{GameError, GameResult};
use crate::events::collision::EntityCollisionSignal;
use crate::events::input::{InputAction, KeyPressedSignal};
use crate::platform::{Color, Platform};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gridindex::GridIndex;
use crate::scheduler::GameSystem;
use crate::systems::gridmap::draw_tile;
use crate::systems::input::bound_action;

/// Facing of a freshly spawned snake.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Accumulated `delta * speed` needed for one tick.
const TICK_THRESHOLD: f32 = 1.0;

const HEAD_COLOR: Color = Color::from_hex(0xFF5050FF);
const BODY_COLOR: Color = Color::RED;

/// Tuning read from [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeSettings {
    /// Ticks per second right after spawning.
    pub base_speed: f32,
    pub speed_increment: f32,
    /// Every this many apples the speed grows by `speed_increment`. Zero
    /// disables speed-ups.
    pub apples_per_speedup: u32,
    pub initial_segments: usize,
    pub spawn_padding: i32,
    pub reset_on_self_collision: bool,
}

impl SnakeSettings {
    pub fn from_config(config: &GameConfig) -> Self {
        SnakeSettings {
            base_speed: config.snake_speed,
            speed_increment: config.snake_speed_increment,
            apples_per_speedup: config.apples_per_speedup,
            initial_segments: config.initial_segments,
            spawn_padding: config.snake_spawn_padding,
            reset_on_self_collision: config.reset_on_self_collision,
        }
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// One cell of the chain and the direction it last moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: GridPosition,
    pub direction: Direction,
}

/// What a call to [`SnakeController::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No snake alive.
    Idle,
    /// The chain moved into an empty cell (or one held by something inert).
    Moved,
    /// The head moved onto an apple and the chain grew.
    Ate { apple: Entity, snake: Entity },
    /// The head hit the body and the snake was reset.
    Reset,
    /// The head hit the body but resets are disabled.
    SelfCollisionIgnored,
}

#[derive(Resource, Debug)]
pub struct SnakeController {
    entity: Option<Entity>,
    // segments[0] is the head
    segments: Vec<Segment>,
    pending_direction: Direction,
    time_passed: f32,
    speed: f32,
    last_score: u32,
    // apples whose cells the chain claimed outside of a head move
    covered: Vec<EntityCollisionSignal>,
    settings: SnakeSettings,
}

impl Default for SnakeController {
    fn default() -> Self {
        Self::new(SnakeSettings::default())
    }
}

impl SnakeController {
    pub fn new(settings: SnakeSettings) -> Self {
        SnakeController {
            entity: None,
            segments: Vec::new(),
            pending_direction: INITIAL_DIRECTION,
            time_passed: 0.0,
            speed: settings.base_speed,
            last_score: 0,
            covered: Vec::new(),
            settings,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(SnakeSettings::from_config(config))
    }

    pub fn is_alive(&self) -> bool {
        self.entity.is_some()
    }

    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    /// Chain cells, head first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments behind the head.
    pub fn body_len(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn head(&self) -> Option<GridPosition> {
        self.segments.first().map(|s| s.position)
    }

    /// Direction the head last moved in ([`INITIAL_DIRECTION`] when not alive).
    pub fn head_direction(&self) -> Direction {
        self.segments
            .first()
            .map_or(INITIAL_DIRECTION, |s| s.direction)
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Current speed multiplier in ticks per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Apples eaten by the snake before its most recent reset.
    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    /// Drain the apples the chain was laid or grown over since the last call.
    pub fn take_covered(&mut self) -> Vec<EntityCollisionSignal> {
        std::mem::take(&mut self.covered)
    }

    /// Spawn at a random empty cell at least `spawn_padding` away from every
    /// edge. Does nothing if already alive.
    pub fn spawn(&mut self, world: &mut World) -> GameResult<Entity> {
        if let Some(entity) = self.entity {
            return Ok(entity);
        }
        let entity = Self::create_entity(world);
        let taken = match world.get_resource_mut::<GridIndex>() {
            Some(mut grid) => grid.take_empty_cell(entity, self.settings.spawn_padding),
            None => Err(GameError::MissingResource("GridIndex")),
        };
        match taken {
            Ok(head) => self.lay_out(world, entity, head),
            Err(e) => {
                world.destroy(entity);
                Err(e)
            }
        }
    }

    /// Spawn with the head at `head`. Apples under the chain's cells are
    /// queued for [`take_covered`](Self::take_covered). Does nothing if
    /// already alive.
    pub fn spawn_at(&mut self, world: &mut World, head: GridPosition) -> GameResult<Entity> {
        if let Some(entity) = self.entity {
            return Ok(entity);
        }
        if !world.contains_resource::<GridIndex>() {
            return Err(GameError::MissingResource("GridIndex"));
        }
        let entity = Self::create_entity(world);
        self.lay_out(world, entity, head)
    }

    fn create_entity(world: &mut World) -> Entity {
        world.create((
            Snake::default(),
            INITIAL_DIRECTION,
            Drawable::new(draw_snake, ZIndex::OBJECTS),
        ))
    }

    fn lay_out(&mut self, world: &mut World, entity: Entity, head: GridPosition) -> GameResult<Entity> {
        let mut segments = vec![Segment {
            position: self.claim_cell(world, entity, head)?,
            direction: INITIAL_DIRECTION,
        }];
        for _ in 0..self.settings.initial_segments {
            let last = segments[segments.len() - 1];
            let behind = last.position.step(last.direction.opposite(), 1);
            let position = self.claim_cell(world, entity, behind)?;
            segments.push(Segment {
                position,
                direction: last.direction,
            });
        }
        let head = segments[0].position;
        world.attach(entity, head)?;

        self.entity = Some(entity);
        self.segments = segments;
        self.pending_direction = INITIAL_DIRECTION;
        self.speed = self.settings.base_speed;
        self.time_passed = 0.0;
        info!(
            "Snake {} spawned at ({}, {}) with {} segments",
            entity,
            head.column,
            head.row,
            self.body_len()
        );
        Ok(entity)
    }

    /// Point the cell at `position` to the snake, remembering an apple that
    /// held it.
    fn claim_cell(
        &mut self,
        world: &mut World,
        entity: Entity,
        position: GridPosition,
    ) -> GameResult<GridPosition> {
        let (position, previous) = {
            let grid = world
                .get_resource::<GridIndex>()
                .ok_or(GameError::MissingResource("GridIndex"))?;
            let position = grid.sanitize(position);
            (position, grid.get_entity(position))
        };
        if let Some(apple) = previous.filter(|&e| e != entity && world.has::<Apple>(e)) {
            debug!(
                "Snake {} covered apple {} at ({}, {})",
                entity, apple, position.column, position.row
            );
            self.covered.push(EntityCollisionSignal {
                entity: apple,
                collider: entity,
            });
        }
        world
            .resource_mut::<GridIndex>()
            .add_entity(entity, position);
        Ok(position)
    }

    /// Queue `direction` for the next tick.
    ///
    /// Returns `false` when the request was dropped: no snake alive, an
    /// unknown direction, or the exact reverse of the head direction.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if !self.is_alive() || direction == Direction::Unknown {
            return false;
        }
        let current = self.head_direction();
        if direction == current.opposite() {
            debug!("Ignoring reversal from {:?} to {:?}", current, direction);
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Accumulate `dt` scaled by the speed. Returns `true` when a tick is due
    /// and restarts the accumulator.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.time_passed += dt * self.speed;
        if self.time_passed >= TICK_THRESHOLD {
            self.time_passed = 0.0;
            true
        } else {
            false
        }
    }

    /// Move the chain one cell and resolve whatever the head ran into.
    pub fn tick(&mut self, world: &mut World) -> GameResult<TickOutcome> {
        let Some(entity) = self.entity else {
            return Ok(TickOutcome::Idle);
        };
        let old_head = self.segments[0];
        let direction = Direction::sanitized(old_head.direction, self.pending_direction);
        self.pending_direction = direction;

        let (new_head, displaced) = {
            let mut grid = world
                .get_resource_mut::<GridIndex>()
                .ok_or(GameError::MissingResource("GridIndex"))?;
            let (new_head, displaced) =
                grid.move_entity(old_head.position, old_head.position.step(direction, 1));
            self.segments[0] = Segment {
                position: new_head,
                direction,
            };
            // Each segment takes its predecessor's cell and direction.
            let mut previous = old_head;
            for segment in self.segments.iter_mut().skip(1) {
                let current = *segment;
                grid.move_entity(current.position, previous.position);
                *segment = previous;
                previous = current;
            }
            // A segment leaving a cell another segment still covers cleared it.
            for segment in &self.segments {
                grid.add_entity(entity, segment.position);
            }
            (new_head, displaced)
        };
        world.attach(entity, direction)?;
        world.attach(entity, new_head)?;

        match displaced {
            Some(other) if world.has::<Snake>(other) => {
                if self.settings.reset_on_self_collision {
                    self.reset(world);
                    Ok(TickOutcome::Reset)
                } else {
                    warn!(
                        "Snake ran into itself at ({}, {}); resets are disabled",
                        new_head.column, new_head.row
                    );
                    Ok(TickOutcome::SelfCollisionIgnored)
                }
            }
            Some(other) if world.has::<Apple>(other) => {
                self.grow(world, entity)?;
                Ok(TickOutcome::Ate {
                    apple: other,
                    snake: entity,
                })
            }
            Some(other) => {
                debug!("Snake moved over {} which is neither snake nor apple", other);
                Ok(TickOutcome::Moved)
            }
            None => Ok(TickOutcome::Moved),
        }
    }

    fn grow(&mut self, world: &mut World, entity: Entity) -> GameResult<()> {
        let mut snake = *world.fragment::<Snake>(entity)?;
        snake.apples_eaten += 1;
        world.attach(entity, snake)?;
        if self.settings.apples_per_speedup > 0
            && snake.apples_eaten % self.settings.apples_per_speedup == 0
        {
            self.speed += self.settings.speed_increment;
            info!("Snake speed up to {}", self.speed);
        }

        let tail = self.segments[self.segments.len() - 1];
        let behind = tail.position.step(tail.direction.opposite(), 1);
        let position = self.claim_cell(world, entity, behind)?;
        self.segments.push(Segment {
            position,
            direction: tail.direction,
        });
        debug!(
            "Snake ate apple #{}, now {} segments",
            snake.apples_eaten,
            self.body_len()
        );
        Ok(())
    }

    /// Destroy the snake, free its cells and return to the never-spawned
    /// state. The score is kept as [`last_score`](Self::last_score).
    pub fn reset(&mut self, world: &mut World) {
        let Some(entity) = self.entity.take() else {
            return;
        };
        self.last_score = world
            .fragment::<Snake>(entity)
            .map(|s| s.apples_eaten)
            .unwrap_or(0);
        if let Some(mut grid) = world.get_resource_mut::<GridIndex>() {
            for segment in &self.segments {
                if grid.get_entity(segment.position) == Some(entity) {
                    grid.remove_entity(segment.position);
                }
            }
        }
        world.destroy(entity);
        self.segments.clear();
        self.pending_direction = INITIAL_DIRECTION;
        self.speed = self.settings.base_speed;
        self.time_passed = 0.0;
        info!("Snake reset, score {}", self.last_score);
    }
}

fn draw_snake(entity: Entity, world: &World, platform: &mut dyn Platform) {
    let (Some(snake), Some(grid)) = (
        world.get_resource::<SnakeController>(),
        world.get_resource::<GridIndex>(),
    ) else {
        return;
    };
    if snake.entity() != Some(entity) {
        return;
    }
    // Body first so the head is painted last.
    for segment in snake.segments().iter().skip(1) {
        draw_tile(grid, platform, segment.position, BODY_COLOR);
    }
    if let Some(head) = snake.head() {
        draw_tile(grid, platform, head, HEAD_COLOR);
    }
}

/// Start and steering actions for the [`SnakeController`].
fn on_key_pressed(signal: &KeyPressedSignal, ctx: &mut GameContext<'_>) -> GameResult<()> {
    let Some(action) = bound_action(ctx.world, signal.key) else {
        return Ok(());
    };
    if !ctx.world.contains_resource::<SnakeController>() {
        return Ok(());
    }
    match action {
        InputAction::Start => ctx.world.resource_scope(
            |world, mut snake: Mut<SnakeController>| -> GameResult<()> {
                if !snake.is_alive() {
                    snake.spawn(world)?;
                }
                Ok(())
            },
        ),
        InputAction::Steer(direction) => {
            ctx.world
                .resource_mut::<SnakeController>()
                .change_direction(direction);
            Ok(())
        }
        InputAction::ToggleFullscreen | InputAction::ToggleDebug => Ok(()),
    }
}

/// Drives the [`SnakeController`] once per frame.
#[derive(Debug, Default)]
pub struct SnakeSystem;

impl GameSystem for SnakeSystem {
    fn name(&self) -> &'static str {
        "snake"
    }

    fn initialize(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<SnakeController>() {
            let controller = ctx
                .world
                .get_resource::<GameConfig>()
                .map(SnakeController::from_config)
                .unwrap_or_default();
            ctx.world.insert_resource(controller);
        }
        ctx.subscribe(on_key_pressed);
        Ok(())
    }

    fn update(&mut self, ctx: &mut GameContext<'_>) -> GameResult<()> {
        if !ctx.world.contains_resource::<SnakeController>() {
            return Err(GameError::MissingResource("SnakeController"));
        }
        let dt = ctx.delta();
        let (outcome, covered) = ctx.world.resource_scope(
            |world, mut snake: Mut<SnakeController>| -> GameResult<(TickOutcome, Vec<EntityCollisionSignal>)> {
                let outcome = if snake.advance(dt) {
                    snake.tick(world)?
                } else {
                    TickOutcome::Idle
                };
                Ok((outcome, snake.take_covered()))
            },
        )?;
        if let TickOutcome::Ate { apple, snake } = outcome {
            ctx.publish(EntityCollisionSignal {
                entity: apple,
                collider: snake,
            })?;
        }
        for signal in covered {
            ctx.publish(signal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(settings: SnakeSettings) -> (World, SnakeController) {
        let mut world = World::new();
        world.insert_resource(GridIndex::new(40, 24, 20, fastrand::Rng::with_seed(3)).unwrap());
        (world, SnakeController::new(settings))
    }

    fn positions(snake: &SnakeController) -> Vec<(i32, i32)> {
        snake
            .segments()
            .iter()
            .map(|s| (s.position.column, s.position.row))
            .collect()
    }

    #[test]
    fn spawn_lays_segments_behind_the_head() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert!(snake.is_alive());
        assert_eq!(positions(&snake), vec![(20, 12), (19, 12), (18, 12), (17, 12)]);
        let grid = world.resource::<GridIndex>();
        for s in snake.segments() {
            assert_eq!(grid.get_entity(s.position), Some(entity));
        }
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn random_spawn_respects_padding() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        snake.spawn(&mut world).unwrap();
        let head = snake.head().unwrap();
        assert!((4..36).contains(&head.column));
        assert!((4..20).contains(&head.row));
    }

    #[test]
    fn spawn_without_room_fails_and_leaves_no_entity() {
        let mut world = World::new();
        world.insert_resource(GridIndex::new(6, 6, 20, fastrand::Rng::with_seed(3)).unwrap());
        let mut snake = SnakeController::new(SnakeSettings::default());
        assert!(matches!(
            snake.spawn(&mut world),
            Err(GameError::CapacityExhausted { .. })
        ));
        assert!(!snake.is_alive());
        assert!(world.matching::<With<Snake>>().is_empty());
    }

    #[test]
    fn tick_moves_head_and_frees_the_old_tail() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert_eq!(snake.tick(&mut world).unwrap(), TickOutcome::Moved);
        assert_eq!(positions(&snake), vec![(21, 12), (20, 12), (19, 12), (18, 12)]);
        let grid = world.resource::<GridIndex>();
        assert!(grid.is_empty(GridPosition::new(17, 12)));
        assert_eq!(grid.get_entity(GridPosition::new(21, 12)), Some(entity));
        assert_eq!(
            *world.fragment::<GridPosition>(entity).unwrap(),
            GridPosition::new(21, 12)
        );
    }

    #[test]
    fn reversal_is_dropped_and_turns_are_applied() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert!(!snake.change_direction(Direction::Left));
        assert!(snake.change_direction(Direction::Up));
        snake.tick(&mut world).unwrap();
        assert_eq!(snake.head(), Some(GridPosition::new(20, 11)));
        assert_eq!(
            *world.fragment::<Direction>(entity).unwrap(),
            Direction::Up
        );
        // Down is now the reversal.
        assert!(!snake.change_direction(Direction::Down));
    }

    #[test]
    fn change_direction_needs_a_live_snake() {
        let mut snake = SnakeController::default();
        assert!(!snake.change_direction(Direction::Up));
        assert_eq!(snake.pending_direction(), INITIAL_DIRECTION);
    }

    #[test]
    fn head_wraps_around_the_edge() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        snake.spawn_at(&mut world, GridPosition::new(39, 0)).unwrap();
        snake.tick(&mut world).unwrap();
        assert_eq!(snake.head(), Some(GridPosition::new(0, 0)));
        snake.change_direction(Direction::Up);
        snake.tick(&mut world).unwrap();
        assert_eq!(snake.head(), Some(GridPosition::new(0, 23)));
    }

    #[test]
    fn advance_fires_at_most_one_tick() {
        let mut snake = SnakeController::default();
        assert!(!snake.advance(10.0));
        let (mut world, _) = setup(SnakeSettings::default());
        snake.spawn_at(&mut world, GridPosition::new(10, 10)).unwrap();
        // 12 ticks per second
        assert!(!snake.advance(0.05));
        assert!(snake.advance(0.05));
        assert!(!snake.advance(0.0));
        assert!(snake.advance(5.0));
        assert!(!snake.advance(0.01));
    }

    #[test]
    fn eating_grows_the_tail_and_speeds_up() {
        let settings = SnakeSettings {
            apples_per_speedup: 2,
            ..SnakeSettings::default()
        };
        let (mut world, mut snake) = setup(settings);
        let entity = snake.spawn_at(&mut world, GridPosition::new(10, 5)).unwrap();
        let base = snake.speed();
        for (n, column) in [11, 12].into_iter().enumerate() {
            let apple = world.create(Apple);
            world
                .resource_mut::<GridIndex>()
                .add_entity(apple, GridPosition::new(column, 5));
            assert_eq!(
                snake.tick(&mut world).unwrap(),
                TickOutcome::Ate {
                    apple,
                    snake: entity
                }
            );
            assert_eq!(snake.body_len(), 3 + n + 1);
        }
        assert_eq!(world.fragment::<Snake>(entity).unwrap().apples_eaten, 2);
        assert!((snake.speed() - (base + settings.speed_increment)).abs() < 1e-6);
        let tail = snake.segments().last().unwrap().position;
        assert_eq!(
            world.resource::<GridIndex>().get_entity(tail),
            Some(entity)
        );
    }

    fn coil(snake: &mut SnakeController, world: &mut World) -> TickOutcome {
        // Right, Down, Left, Up with five body segments hits the body.
        for d in [Direction::Down, Direction::Left] {
            snake.change_direction(d);
            snake.tick(world).unwrap();
        }
        snake.change_direction(Direction::Up);
        snake.tick(world).unwrap()
    }

    #[test]
    fn self_collision_resets_and_clears_cells() {
        let settings = SnakeSettings {
            initial_segments: 5,
            ..SnakeSettings::default()
        };
        let (mut world, mut snake) = setup(settings);
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert_eq!(coil(&mut snake, &mut world), TickOutcome::Reset);
        assert!(!snake.is_alive());
        assert!(!world.is_alive(entity));
        assert!(snake.segments().is_empty());
        assert_eq!(world.resource::<GridIndex>().occupied_count(), 0);
        assert_eq!(snake.pending_direction(), INITIAL_DIRECTION);

        // Not a dead end.
        snake.spawn_at(&mut world, GridPosition::new(5, 5)).unwrap();
        assert!(snake.is_alive());
    }

    #[test]
    fn self_collision_is_ignored_when_resets_are_disabled() {
        let settings = SnakeSettings {
            initial_segments: 5,
            reset_on_self_collision: false,
            ..SnakeSettings::default()
        };
        let (mut world, mut snake) = setup(settings);
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert_eq!(
            coil(&mut snake, &mut world),
            TickOutcome::SelfCollisionIgnored
        );
        assert!(snake.is_alive());
        let grid = world.resource::<GridIndex>();
        assert_eq!(grid.get_entity(snake.head().unwrap()), Some(entity));
    }

    #[test]
    fn grid_follows_overlapping_segments_when_resets_are_disabled() {
        let settings = SnakeSettings {
            initial_segments: 5,
            reset_on_self_collision: false,
            ..SnakeSettings::default()
        };
        let (mut world, mut snake) = setup(settings);
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        coil(&mut snake, &mut world);
        for _ in 0..3 {
            snake.tick(&mut world).unwrap();
            let grid = world.resource::<GridIndex>();
            for s in snake.segments() {
                assert_eq!(grid.get_entity(s.position), Some(entity));
            }
            let mut distinct = positions(&snake);
            distinct.sort();
            distinct.dedup();
            assert_eq!(grid.occupied_count(), distinct.len());
        }
    }

    #[test]
    fn spawning_over_an_apple_reports_it() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let apple = world.create(Apple);
        world
            .resource_mut::<GridIndex>()
            .add_entity(apple, GridPosition::new(18, 12));
        let entity = snake.spawn_at(&mut world, GridPosition::new(20, 12)).unwrap();
        assert_eq!(
            snake.take_covered(),
            vec![EntityCollisionSignal {
                entity: apple,
                collider: entity
            }]
        );
        assert!(snake.take_covered().is_empty());
        assert_eq!(
            world.resource::<GridIndex>().get_entity(GridPosition::new(18, 12)),
            Some(entity)
        );
    }

    #[test]
    fn growing_over_an_apple_reports_it() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let entity = snake.spawn_at(&mut world, GridPosition::new(10, 5)).unwrap();
        let apple = world.create(Apple);
        world
            .resource_mut::<GridIndex>()
            .add_entity(apple, GridPosition::new(6, 5));
        snake.grow(&mut world, entity).unwrap();
        assert_eq!(snake.segments().last().unwrap().position, GridPosition::new(6, 5));
        assert_eq!(
            snake.take_covered(),
            vec![EntityCollisionSignal {
                entity: apple,
                collider: entity
            }]
        );
    }

    #[test]
    fn reset_keeps_the_score() {
        let (mut world, mut snake) = setup(SnakeSettings::default());
        let entity = snake.spawn_at(&mut world, GridPosition::new(10, 5)).unwrap();
        world.attach(entity, Snake { apples_eaten: 7 }).unwrap();
        snake.reset(&mut world);
        assert_eq!(snake.last_score(), 7);
        assert!(!snake.is_alive());
    }
}
