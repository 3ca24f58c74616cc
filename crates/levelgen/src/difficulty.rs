//! Monotonic difficulty counter and the proportional enemy stat scaler.

use serde::Serialize;

use crate::config::DifficultyConfig;

/// Non-decreasing level capped at `max_level`, advanced once every
/// `spawns_per_level` recorded successes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DifficultyTracker {
    level: u32,
    max_level: u32,
    spawns_per_level: u32,
    successes: u32,
}

impl DifficultyTracker {
    pub fn new(max_level: u32, spawns_per_level: u32) -> Self {
        Self { level: 0, max_level, spawns_per_level: spawns_per_level.max(1), successes: 0 }
    }

    pub fn from_config(config: &DifficultyConfig) -> Self {
        Self::new(config.max_level, config.spawns_per_level)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn successes(&self) -> u32 {
        self.successes
    }

    /// Counts one successful enemy placement. Returns true when the level advanced.
    pub fn record_success(&mut self) -> bool {
        self.successes = self.successes.saturating_add(1);
        if self.successes % self.spawns_per_level == 0 && self.level < self.max_level {
            self.level += 1;
            return true;
        }
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnemyStats {
    pub health: i32,
    pub damage: i32,
    pub move_speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatMultipliers {
    pub health: f32,
    pub damage: f32,
    pub move_speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatScaler {
    pub health_rate: f32,
    pub damage_rate: f32,
    pub speed_rate: f32,
    pub base: EnemyStats,
}

impl StatScaler {
    pub fn from_config(config: &DifficultyConfig) -> Self {
        Self {
            health_rate: config.health_rate,
            damage_rate: config.damage_rate,
            speed_rate: config.speed_rate,
            base: EnemyStats {
                health: config.base_health,
                damage: config.base_damage,
                move_speed: config.base_move_speed,
            },
        }
    }

    pub fn multipliers(&self, level: u32) -> StatMultipliers {
        let level = level as f32;
        StatMultipliers {
            health: 1.0 + level * self.health_rate,
            damage: 1.0 + level * self.damage_rate,
            move_speed: 1.0 + level * self.speed_rate,
        }
    }

    /// Health and damage round to the nearest integer; speed stays fractional.
    pub fn scale(&self, level: u32) -> EnemyStats {
        let multipliers = self.multipliers(level);
        EnemyStats {
            health: (self.base.health as f32 * multipliers.health).round() as i32,
            damage: (self.base.damage as f32 * multipliers.damage).round() as i32,
            move_speed: self.base.move_speed * multipliers.move_speed,
        }
    }
}
