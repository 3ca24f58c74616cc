use glam::Vec3;
use levelgen::config::{DifficultyConfig, SpawnerConfig};
use levelgen::{
    DifficultyTracker, LevelRng, PlayerPose, RuntimeSpawner, SpawnOutcome, SpawnWorld, StatScaler,
};

/// Every navigable point lies straight ahead of the player with nothing in between.
struct StagedInView {
    position: Vec3,
    forward: Vec3,
}

impl SpawnWorld for StagedInView {
    fn ground_height(&self, _probe_origin: Vec3, _max_distance: f32) -> Option<f32> {
        Some(0.0)
    }

    fn nearest_navigable_point(&self, _point: Vec3, _radius: f32) -> Option<Vec3> {
        Some(self.position + self.forward * 15.0)
    }

    fn is_obstructed(&self, _from: Vec3, _to: Vec3) -> bool {
        false
    }
}

/// Open ground where a wall hides everything from the player.
struct FullyOccluded;

impl SpawnWorld for FullyOccluded {
    fn ground_height(&self, _probe_origin: Vec3, _max_distance: f32) -> Option<f32> {
        Some(0.0)
    }

    fn nearest_navigable_point(&self, point: Vec3, _radius: f32) -> Option<Vec3> {
        Some(point)
    }

    fn is_obstructed(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }
}

fn pose() -> PlayerPose {
    PlayerPose { position: Vec3::new(20.0, 1.0, 20.0), forward: Vec3::X }
}

fn spawner() -> RuntimeSpawner {
    let config = SpawnerConfig { spawn_interval_secs: 1.0, ..Default::default() };
    RuntimeSpawner::new(config, StatScaler::from_config(&DifficultyConfig::default()))
}

#[test]
fn in_view_candidates_never_spawn() {
    let pose = pose();
    let world = StagedInView { position: pose.position, forward: pose.forward };
    let mut spawner = spawner();
    let mut difficulty = DifficultyTracker::new(5, 3);
    let mut rng = LevelRng::seed_from_u64(99);

    for tick in 0..100 {
        let outcome = spawner.tick(1.0, &pose, &world, &mut difficulty, &mut rng);
        assert_eq!(outcome, SpawnOutcome::Deferred { attempts: 10 }, "tick {tick}");
    }
    assert_eq!(spawner.live_enemy_count(), 0);
    assert_eq!(difficulty.level(), 0);
}

#[test]
fn occluded_world_spawns_and_raises_difficulty_monotonically() {
    let pose = pose();
    let mut spawner = spawner();
    let mut difficulty = DifficultyTracker::new(5, 3);
    let mut rng = LevelRng::seed_from_u64(7);

    let mut previous = (0, i32::MIN, i32::MIN, f32::MIN);
    let mut spawned = 0;
    for _ in 0..100 {
        if let SpawnOutcome::Spawned(spawn) =
            spawner.tick(1.0, &pose, &FullyOccluded, &mut difficulty, &mut rng)
        {
            let current = (
                spawn.difficulty_level,
                spawn.stats.health,
                spawn.stats.damage,
                spawn.stats.move_speed,
            );
            assert!(current.0 >= previous.0);
            assert!(current.1 >= previous.1);
            assert!(current.2 >= previous.2);
            assert!(current.3 >= previous.3);
            assert!(current.0 <= 5);
            previous = current;
            spawned += 1;

            let (id, _) = spawner.enemies().next().expect("one live enemy");
            spawner.remove_enemy(id);
        }
    }
    assert_eq!(spawned, 100);
    assert_eq!(difficulty.level(), 5);
}
