use std::collections::BTreeSet;

use glam::Vec3;
use levelgen::{ActorKind, Cell, LevelConfig, generate_level};

fn scenario_config() -> LevelConfig {
    let mut config = LevelConfig::default();
    config.grid.width = 10;
    config.grid.length = 10;
    config.grid.room_size = 5.0;
    config.population.player_start = Vec3::new(5.0, 1.0, 5.0);
    config.spawner.min_distance = 10.0;
    config.spawner.max_distance = 30.0;
    config
}

#[test]
fn ten_by_ten_scenario_matches_expected_shape() {
    for seed in 0..40 {
        let level = generate_level(scenario_config(), seed).expect("level");
        let grid = &level.grid;

        assert_eq!(level.player_start.cell, Cell::new(1, 1));
        assert!(grid.is_room(Cell::new(1, 1)));
        assert_eq!(level.player_start.position, Vec3::new(5.0, 1.0, 5.0));

        let skeleton = grid.skeleton_cells();
        let reached = grid.reachable_from(Cell::new(5, 5));
        assert!(skeleton.is_subset(&reached), "seed={seed}");
        for seed_cell in &level.room_seeds {
            assert!(reached.contains(seed_cell), "seed={seed}: room seed {seed_cell:?}");
        }
        let off_skeleton_seeds = level
            .room_seeds
            .iter()
            .filter(|cell| !skeleton.contains(cell))
            .collect::<BTreeSet<_>>()
            .len();
        assert!(reached.len() >= skeleton.len() + off_skeleton_seeds);
        assert!((5..=9).contains(&level.room_seeds.len()));

        for enemy in level.actors_of(ActorKind::Enemy) {
            let distance = enemy.position.with_y(0.0).distance(Vec3::new(5.0, 0.0, 5.0));
            assert!(distance > 15.0, "seed={seed}: enemy at {distance}");
            assert!(grid.is_room(enemy.cell));
        }
    }
}

#[test]
fn scenario_pickups_stay_near_room_centres() {
    let level = generate_level(scenario_config(), 11).expect("level");
    let jitter = 5.0 / 3.0 + 1e-4;
    for pickup in level.actors.iter().filter(|actor| actor.kind.is_pickup()) {
        let origin = level.grid.cell_to_world(pickup.cell);
        assert!(level.grid.is_room(pickup.cell));
        assert!((pickup.position.x - origin.x).abs() <= jitter);
        assert!((pickup.position.z - origin.z).abs() <= jitter);
        assert_eq!(pickup.position.y, 1.0);
    }
}
