//! Property tests for the grid wrap rule, direction sanitizing, moves and the
//! apple cap.

use bevy_ecs::prelude::*;
use proptest::prelude::*;

use mondosnake::GameContext;
use mondosnake::components::direction::Direction;
use mondosnake::components::gridposition::GridPosition;
use mondosnake::events::collision::EntityCollisionSignal;
use mondosnake::platform::headless::HeadlessPlatform;
use mondosnake::resources::gridindex::GridIndex;
use mondosnake::resources::signalbus::SignalBus;
use mondosnake::resources::worldtime::WorldTime;
use mondosnake::scheduler::GameSystem;
use mondosnake::systems::apple::{AppleSpawner, AppleSystem};

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

proptest! {
    #[test]
    fn sanitize_lands_inside_and_is_idempotent(
        columns in 1i32..64,
        rows in 1i32..64,
        column in -1000i32..1000,
        row in -1000i32..1000,
    ) {
        let grid = GridIndex::new(columns, rows, 20, fastrand::Rng::with_seed(0)).unwrap();
        let once = grid.sanitize(GridPosition::new(column, row));
        prop_assert!((0..columns).contains(&once.column));
        prop_assert!((0..rows).contains(&once.row));
        prop_assert_eq!(grid.sanitize(once), once);
    }

    #[test]
    fn reversal_is_always_rejected(current in direction(), next in direction()) {
        let applied = Direction::sanitized(current, next);
        if next == current.opposite() {
            prop_assert_eq!(applied, current);
        } else {
            prop_assert_eq!(applied, next);
        }
    }

    #[test]
    fn move_there_and_back_restores_occupancy(
        occupied in proptest::collection::vec((0i32..10, 0i32..8), 1..20),
        to in (0i32..10, 0i32..8),
    ) {
        let mut world = World::new();
        let mut grid = GridIndex::new(10, 8, 20, fastrand::Rng::with_seed(0)).unwrap();
        for (column, row) in &occupied {
            let e = world.spawn_empty().id();
            grid.add_entity(e, GridPosition::new(*column, *row));
        }
        let from = GridPosition::new(occupied[0].0, occupied[0].1);
        let to = GridPosition::new(to.0, to.1);
        prop_assume!(grid.is_empty(to));

        let before: Vec<_> = (0..8)
            .flat_map(|r| (0..10).map(move |c| GridPosition::new(c, r)))
            .map(|p| grid.get_entity(p))
            .collect();
        let (landed, displaced) = grid.move_entity(from, to);
        prop_assert_eq!(landed, to);
        prop_assert_eq!(displaced, None);
        grid.move_entity(to, from);
        let after: Vec<_> = (0..8)
            .flat_map(|r| (0..10).map(move |c| GridPosition::new(c, r)))
            .map(|p| grid.get_entity(p))
            .collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn apple_population_stays_within_cap(
        max in 1usize..4,
        steps in proptest::collection::vec(prop_oneof![
            (0.0f32..3.0).prop_map(Some),
            Just(None),
        ], 1..40),
    ) {
        let mut world = World::new();
        world.insert_resource(GridIndex::new(40, 24, 20, fastrand::Rng::with_seed(5)).unwrap());
        world.insert_resource(WorldTime::default());
        world.insert_resource(AppleSpawner::new(max, 1.0, 4));
        world.insert_non_send_resource(SignalBus::new());
        let mut platform = HeadlessPlatform::new(800, 480);
        let mut ctx = GameContext::new(&mut world, &mut platform);
        let mut system = AppleSystem;
        system.initialize(&mut ctx).unwrap();
        let eater = ctx.world.spawn_empty().id();

        for step in steps {
            match step {
                // time passes
                Some(dt) => {
                    ctx.world.resource_mut::<WorldTime>().delta = dt;
                    system.update(&mut ctx).unwrap();
                }
                // the oldest apple is eaten
                None => {
                    let first = ctx.world.resource::<AppleSpawner>().apples().first().copied();
                    if let Some(apple) = first {
                        ctx.publish(EntityCollisionSignal { entity: apple, collider: eater }).unwrap();
                        prop_assert!(!ctx.world.resource::<AppleSpawner>().is_empty());
                    }
                }
            }
            prop_assert!(ctx.world.resource::<AppleSpawner>().len() <= max);
        }
    }
}
