//! Level lifecycle owner: one generated level, its difficulty counter, its
//! runtime spawner, and the random stream they draw from.

use log::info;

use crate::config::LevelConfig;
use crate::difficulty::{DifficultyTracker, StatScaler};
use crate::error::LevelError;
use crate::mapgen::{GeneratedLevel, LevelGenerator};
use crate::rng::{LevelRng, RUNTIME_STREAM};
use crate::spawner::{EnemyId, LiveEnemy, PlayerPose, RuntimeSpawner, SpawnOutcome, SpawnWorld};
use crate::world::GridWorld;

#[derive(Debug)]
pub struct LevelSession {
    config: LevelConfig,
    level: GeneratedLevel,
    difficulty: DifficultyTracker,
    spawner: RuntimeSpawner,
    rng: LevelRng,
}

impl LevelSession {
    pub fn new(config: LevelConfig, seed: u64) -> Result<Self, LevelError> {
        let level = LevelGenerator::new(config.clone(), seed)?.generate()?;
        let difficulty = level.difficulty;
        let spawner = RuntimeSpawner::new(
            config.spawner.clone(),
            StatScaler::from_config(&config.difficulty),
        );
        let rng = LevelRng::for_stream(seed, RUNTIME_STREAM);
        Ok(Self { config, level, difficulty, spawner, rng })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn level(&self) -> &GeneratedLevel {
        &self.level
    }

    pub fn difficulty(&self) -> &DifficultyTracker {
        &self.difficulty
    }

    pub fn spawner(&self) -> &RuntimeSpawner {
        &self.spawner
    }

    pub fn player_start_pose(&self) -> PlayerPose {
        self.level.player_start.into()
    }

    pub fn tick(&mut self, dt: f32, pose: &PlayerPose, world: &impl SpawnWorld) -> SpawnOutcome {
        self.spawner.tick(dt, pose, world, &mut self.difficulty, &mut self.rng)
    }

    /// Ticks against the flat-floor world derived from this level's own grid.
    pub fn tick_on_grid(&mut self, dt: f32, pose: &PlayerPose) -> SpawnOutcome {
        let world = GridWorld::new(&self.level.grid);
        self.spawner.tick(dt, pose, &world, &mut self.difficulty, &mut self.rng)
    }

    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<LiveEnemy> {
        self.spawner.remove_enemy(id)
    }

    /// Replaces the level with a fresh one; difficulty and live enemies reset.
    pub fn regenerate(&mut self, seed: u64) -> Result<(), LevelError> {
        let fresh = Self::new(self.config.clone(), seed)?;
        self.spawner.teardown();
        *self = fresh;
        info!("regenerated level with seed {seed}");
        Ok(())
    }

    pub fn teardown(&mut self) {
        self.spawner.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawner::SpawnerPhase;

    #[test]
    fn session_continues_difficulty_from_initial_population() {
        let session = LevelSession::new(LevelConfig::default(), 314).expect("session");
        assert_eq!(session.difficulty(), &session.level().difficulty);
        assert_eq!(session.spawner().live_enemy_count(), 0);
    }

    #[test]
    fn regenerate_resets_difficulty_and_spawner() {
        let mut config = LevelConfig::default();
        config.spawner.spawn_interval_secs = 1.0;
        config.spawner.view_half_angle_degrees = 1.0;
        let mut session = LevelSession::new(config, 5).expect("session");
        let pose = session.player_start_pose();
        for _ in 0..30 {
            session.tick_on_grid(1.0, &pose);
        }

        session.regenerate(6).expect("regenerate");
        assert_eq!(session.level().seed, 6);
        assert_eq!(session.difficulty(), &session.level().difficulty);
        assert_eq!(session.spawner().live_enemy_count(), 0);
        assert_eq!(session.spawner().phase(), SpawnerPhase::Idle);
    }

    #[test]
    fn unreachable_spawn_ring_defers_instead_of_panicking() {
        let mut config = LevelConfig::default();
        config.spawner.spawn_interval_secs = 1.0;
        config.spawner.min_distance = 1.0e11;
        config.spawner.max_distance = 1.0e12;
        let mut session = LevelSession::new(config, 12).expect("session");
        let pose = session.player_start_pose();
        for _ in 0..5 {
            assert_eq!(session.tick_on_grid(1.0, &pose), SpawnOutcome::Deferred { attempts: 10 });
        }
        assert_eq!(session.spawner().live_enemy_count(), 0);
    }

    #[test]
    fn teardown_stops_ticking() {
        let mut session = LevelSession::new(LevelConfig::default(), 8).expect("session");
        let pose = session.player_start_pose();
        session.teardown();
        assert_eq!(session.tick_on_grid(100.0, &pose), SpawnOutcome::TornDown);
    }
}
