//! Static numeric parameters for one level: grid shape, room scattering,
//! boundary odds, initial population, difficulty scaling, and runtime spawning.
//! Every section deserializes with defaults so partial TOML files are valid.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub grid: GridConfig,
    pub rooms: RoomConfig,
    pub boundary: BoundaryConfig,
    pub population: PopulationConfig,
    pub difficulty: DifficultyConfig,
    pub spawner: SpawnerConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub length: usize,
    pub room_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 10, length: 10, room_size: 5.0 }
    }
}

/// Inclusive bounds on the number of scattered room seeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub min_rooms: usize,
    pub max_rooms: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self { min_rooms: 5, max_rooms: 9 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub door_probability: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { door_probability: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub min_enemies: usize,
    pub max_enemies: usize,
    pub health_pickups: usize,
    pub ammo_pickups: usize,
    /// Requested player start in world units; snapped to a cell by floor division.
    pub player_start: Vec3,
    /// Vertical coordinate given to the player and every initial actor.
    pub spawn_height: f32,
    /// Enemies must be strictly farther than `enemy_exclusion_rooms * room_size`
    /// from the player start.
    pub enemy_exclusion_rooms: f32,
    /// Pickup jitter on each horizontal axis, as a fraction of `room_size`.
    pub pickup_jitter_fraction: f32,
    pub retry_cap: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            min_enemies: 5,
            max_enemies: 15,
            health_pickups: 3,
            ammo_pickups: 5,
            player_start: Vec3::new(2.0, 1.0, 2.0),
            spawn_height: 1.0,
            enemy_exclusion_rooms: 3.0,
            pickup_jitter_fraction: 1.0 / 3.0,
            retry_cap: 10_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub max_level: u32,
    pub spawns_per_level: u32,
    pub health_rate: f32,
    pub damage_rate: f32,
    pub speed_rate: f32,
    pub base_health: i32,
    pub base_damage: i32,
    pub base_move_speed: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            max_level: 5,
            spawns_per_level: 3,
            health_rate: 0.2,
            damage_rate: 0.1,
            speed_rate: 0.05,
            base_health: 100,
            base_damage: 10,
            base_move_speed: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub max_enemies: usize,
    pub spawn_interval_secs: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub view_half_angle_degrees: f32,
    pub eye_height: f32,
    pub probe_height: f32,
    pub probe_depth: f32,
    pub ground_offset: f32,
    pub navigable_radius: f32,
    pub max_attempts: u32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            max_enemies: 10,
            spawn_interval_secs: 5.0,
            min_distance: 10.0,
            max_distance: 30.0,
            view_half_angle_degrees: 60.0,
            eye_height: 1.6,
            probe_height: 10.0,
            probe_depth: 20.0,
            ground_offset: 1.0,
            navigable_radius: 5.0,
            max_attempts: 10,
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.width < 3 || grid.length < 3 {
            return Err(ConfigError::GridTooSmall { width: grid.width, length: grid.length });
        }
        positive("grid.room_size", grid.room_size)?;

        ordered("rooms", self.rooms.min_rooms as f32, self.rooms.max_rooms as f32)?;
        probability("boundary.door_probability", self.boundary.door_probability)?;

        let population = &self.population;
        ordered("population.enemies", population.min_enemies as f32, population.max_enemies as f32)?;
        non_negative("population.spawn_height", population.spawn_height)?;
        non_negative("population.enemy_exclusion_rooms", population.enemy_exclusion_rooms)?;
        non_negative("population.pickup_jitter_fraction", population.pickup_jitter_fraction)?;
        if !population.player_start.is_finite() {
            return Err(ConfigError::NonFinite { name: "population.player_start" });
        }
        if population.retry_cap == 0 {
            return Err(ConfigError::ZeroCount { name: "population.retry_cap" });
        }

        let difficulty = &self.difficulty;
        if difficulty.spawns_per_level == 0 {
            return Err(ConfigError::ZeroCount { name: "difficulty.spawns_per_level" });
        }
        non_negative("difficulty.health_rate", difficulty.health_rate)?;
        non_negative("difficulty.damage_rate", difficulty.damage_rate)?;
        non_negative("difficulty.speed_rate", difficulty.speed_rate)?;
        positive("difficulty.base_health", difficulty.base_health as f32)?;
        non_negative("difficulty.base_damage", difficulty.base_damage as f32)?;
        positive("difficulty.base_move_speed", difficulty.base_move_speed)?;

        let spawner = &self.spawner;
        if spawner.max_enemies == 0 {
            return Err(ConfigError::ZeroCount { name: "spawner.max_enemies" });
        }
        if spawner.max_attempts == 0 {
            return Err(ConfigError::ZeroCount { name: "spawner.max_attempts" });
        }
        positive("spawner.spawn_interval_secs", spawner.spawn_interval_secs)?;
        non_negative("spawner.min_distance", spawner.min_distance)?;
        non_negative("spawner.max_distance", spawner.max_distance)?;
        ordered("spawner.distance", spawner.min_distance, spawner.max_distance)?;
        let angle = spawner.view_half_angle_degrees;
        if !(angle > 0.0 && angle <= 180.0) {
            return Err(ConfigError::AngleOutOfRange {
                name: "spawner.view_half_angle_degrees",
                value: angle,
            });
        }
        non_negative("spawner.eye_height", spawner.eye_height)?;
        non_negative("spawner.probe_height", spawner.probe_height)?;
        positive("spawner.probe_depth", spawner.probe_depth)?;
        non_negative("spawner.navigable_radius", spawner.navigable_radius)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max { Ok(()) } else { Err(ConfigError::InvertedRange { name, min, max }) }
}

fn probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
