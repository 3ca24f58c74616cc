//! Ongoing enemy spawning around the player during play.
//! This module exists to keep runtime placement rules (distance annulus, ground
//! probe, navigable sampling, and view-cone exclusion) deterministic and isolated.
//! It does not own world geometry; hosts supply it through `SpawnWorld`.

use std::f32::consts::TAU;

use glam::Vec3;
use log::{debug, trace};
use serde::Serialize;
use slotmap::{SlotMap, new_key_type};

use crate::config::SpawnerConfig;
use crate::difficulty::{DifficultyTracker, EnemyStats, StatMultipliers, StatScaler};
use crate::mapgen::PlayerStart;
use crate::rng::LevelRng;

new_key_type! {
    pub struct EnemyId;
}

/// World queries the host engine answers for the spawner.
pub trait SpawnWorld {
    /// Height of the first surface hit when probing straight down from `probe_origin`.
    fn ground_height(&self, probe_origin: Vec3, max_distance: f32) -> Option<f32>;
    fn nearest_navigable_point(&self, point: Vec3, radius: f32) -> Option<Vec3>;
    fn is_obstructed(&self, from: Vec3, to: Vec3) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerPose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl From<PlayerStart> for PlayerPose {
    fn from(start: PlayerStart) -> Self {
        Self { position: start.position, forward: start.forward }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LiveEnemy {
    pub position: Vec3,
    pub difficulty_level: u32,
    pub stats: EnemyStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SpawnerPhase {
    Idle,
    Attempting,
    TornDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rejection {
    NoNavigablePoint,
    VisibleToPlayer,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RuntimeSpawn {
    #[serde(skip)]
    pub id: EnemyId,
    pub position: Vec3,
    pub difficulty_level: u32,
    pub multipliers: StatMultipliers,
    pub stats: EnemyStats,
    /// 1-based index of the attempt that succeeded.
    pub attempt: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SpawnOutcome {
    /// Timer still counting down.
    Waiting,
    /// Live enemy count is at the cap; the timer is paused.
    AtCapacity,
    Spawned(RuntimeSpawn),
    /// Every attempt was rejected; retried on the next interval.
    Deferred { attempts: u32 },
    TornDown,
}

#[derive(Debug)]
pub struct RuntimeSpawner {
    config: SpawnerConfig,
    scaler: StatScaler,
    countdown: f32,
    phase: SpawnerPhase,
    enemies: SlotMap<EnemyId, LiveEnemy>,
}

impl RuntimeSpawner {
    pub fn new(config: SpawnerConfig, scaler: StatScaler) -> Self {
        Self {
            countdown: config.spawn_interval_secs,
            config,
            scaler,
            phase: SpawnerPhase::Idle,
            enemies: SlotMap::with_key(),
        }
    }

    pub fn phase(&self) -> SpawnerPhase {
        self.phase
    }

    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemies(&self) -> impl Iterator<Item = (EnemyId, &LiveEnemy)> + '_ {
        self.enemies.iter()
    }

    /// Called by the host when a spawned actor leaves play.
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<LiveEnemy> {
        self.enemies.remove(id)
    }

    /// Stops the spawner for good; later ticks do nothing.
    pub fn teardown(&mut self) {
        self.phase = SpawnerPhase::TornDown;
        self.enemies.clear();
    }

    pub fn tick(
        &mut self,
        dt: f32,
        pose: &PlayerPose,
        world: &impl SpawnWorld,
        difficulty: &mut DifficultyTracker,
        rng: &mut LevelRng,
    ) -> SpawnOutcome {
        if self.phase == SpawnerPhase::TornDown {
            return SpawnOutcome::TornDown;
        }
        if self.enemies.len() >= self.config.max_enemies {
            return SpawnOutcome::AtCapacity;
        }

        self.countdown -= dt;
        if self.countdown > 0.0 {
            return SpawnOutcome::Waiting;
        }
        self.countdown = self.config.spawn_interval_secs;

        self.phase = SpawnerPhase::Attempting;
        let outcome = match self.find_spawn_position(pose, world, rng) {
            Some((position, attempt)) => {
                SpawnOutcome::Spawned(self.spawn_at(position, attempt, difficulty))
            }
            None => {
                debug!("spawn deferred after {} attempts", self.config.max_attempts);
                SpawnOutcome::Deferred { attempts: self.config.max_attempts }
            }
        };
        self.phase = SpawnerPhase::Idle;
        outcome
    }

    pub fn find_spawn_position(
        &self,
        pose: &PlayerPose,
        world: &impl SpawnWorld,
        rng: &mut LevelRng,
    ) -> Option<(Vec3, u32)> {
        for attempt in 1..=self.config.max_attempts {
            match self.evaluate_candidate(pose, world, rng) {
                Ok(position) => return Some((position, attempt)),
                Err(rejection) => trace!("spawn attempt {attempt} rejected: {rejection:?}"),
            }
        }
        None
    }

    fn evaluate_candidate(
        &self,
        pose: &PlayerPose,
        world: &impl SpawnWorld,
        rng: &mut LevelRng,
    ) -> Result<Vec3, Rejection> {
        let config = &self.config;
        let angle = rng.range_f32(0.0, TAU);
        let direction = Vec3::new(angle.cos(), 0.0, angle.sin());
        let distance = rng.range_f32(config.min_distance, config.max_distance);
        let mut candidate = pose.position + direction * distance;

        let probe_origin = candidate + Vec3::Y * config.probe_height;
        if let Some(ground) = world.ground_height(probe_origin, config.probe_depth) {
            candidate.y = ground + config.ground_offset;
        }

        let point = world
            .nearest_navigable_point(candidate, config.navigable_radius)
            .ok_or(Rejection::NoNavigablePoint)?;
        if self.is_visible_to_player(pose, point, world) {
            return Err(Rejection::VisibleToPlayer);
        }
        Ok(point)
    }

    /// In the forward view cone and not obstructed from eye height.
    pub fn is_visible_to_player(
        &self,
        pose: &PlayerPose,
        point: Vec3,
        world: &impl SpawnWorld,
    ) -> bool {
        let half_angle = self.config.view_half_angle_degrees.to_radians();
        if !in_view_cone(pose.forward, point - pose.position, half_angle) {
            return false;
        }
        let eye = pose.position + Vec3::Y * self.config.eye_height;
        !world.is_obstructed(eye, point)
    }

    fn spawn_at(
        &mut self,
        position: Vec3,
        attempt: u32,
        difficulty: &mut DifficultyTracker,
    ) -> RuntimeSpawn {
        let level = difficulty.level();
        let stats = self.scaler.scale(level);
        let id = self.enemies.insert(LiveEnemy { position, difficulty_level: level, stats });
        if difficulty.record_success() {
            debug!("runtime spawning raised difficulty to {}", difficulty.level());
        }
        RuntimeSpawn {
            id,
            position,
            difficulty_level: level,
            multipliers: self.scaler.multipliers(level),
            stats,
            attempt,
        }
    }
}

/// Degenerate vectors count as inside the cone.
pub fn in_view_cone(forward: Vec3, offset: Vec3, half_angle_radians: f32) -> bool {
    let (Some(forward), Some(offset)) = (forward.try_normalize(), offset.try_normalize()) else {
        return true;
    };
    forward.dot(offset).clamp(-1.0, 1.0).acos() <= half_angle_radians
}
