//! Rejection-sampled initial population: player, enemies, and pickups.
//! Every draw loop is capped; a capped-out draw becomes a `PlacementFailed`
//! record for that one actor instead of stalling generation.

use glam::Vec3;
use log::{debug, warn};

use crate::config::PopulationConfig;
use crate::difficulty::{DifficultyTracker, StatScaler};
use crate::error::PlacementError;
use crate::rng::LevelRng;
use crate::types::{ActorKind, Cell};

use super::grid::Grid;
use super::model::{ActorPlacement, EnemyProfile, PlayerStart};

pub(super) struct PlacementContext<'a> {
    pub(super) grid: &'a Grid,
    pub(super) population: &'a PopulationConfig,
    pub(super) player_start: PlayerStart,
}

pub(super) struct Population {
    pub(super) actors: Vec<ActorPlacement>,
    pub(super) failures: Vec<PlacementError>,
    pub(super) enemies_to_win: usize,
}

pub(super) fn populate(
    context: &PlacementContext<'_>,
    difficulty: &mut DifficultyTracker,
    scaler: &StatScaler,
    rng: &mut LevelRng,
) -> Population {
    let population = context.population;
    let mut actors = vec![ActorPlacement {
        kind: ActorKind::Player,
        cell: context.player_start.cell,
        position: context.player_start.position,
        enemy: None,
    }];
    let mut failures = Vec::new();

    let enemies_to_win = rng.range_usize(population.min_enemies, population.max_enemies);
    for _ in 0..enemies_to_win {
        match sample_enemy_cell(context, rng) {
            Ok(cell) => {
                let level = difficulty.level();
                actors.push(ActorPlacement {
                    kind: ActorKind::Enemy,
                    cell,
                    position: actor_position(context, cell),
                    enemy: Some(EnemyProfile {
                        difficulty_level: level,
                        multipliers: scaler.multipliers(level),
                        stats: scaler.scale(level),
                    }),
                });
                if difficulty.record_success() {
                    debug!("initial population raised difficulty to {}", difficulty.level());
                }
            }
            Err(error) => {
                warn!("{error}");
                failures.push(error);
            }
        }
    }

    for (kind, count) in [
        (ActorKind::HealthPickup, population.health_pickups),
        (ActorKind::AmmoPickup, population.ammo_pickups),
    ] {
        for _ in 0..count {
            match sample_pickup(context, kind, rng) {
                Ok(placement) => actors.push(placement),
                Err(error) => {
                    warn!("{error}");
                    failures.push(error);
                }
            }
        }
    }

    Population { actors, failures, enemies_to_win }
}

/// Uniform cell over the whole grid, border included.
fn random_cell(grid: &Grid, rng: &mut LevelRng) -> Cell {
    Cell {
        x: rng.range_i32(0, grid.width() as i32 - 1),
        z: rng.range_i32(0, grid.length() as i32 - 1),
    }
}

fn actor_position(context: &PlacementContext<'_>, cell: Cell) -> Vec3 {
    context.grid.cell_to_world(cell).with_y(context.population.spawn_height)
}

pub(super) fn enemy_exclusion_radius(context: &PlacementContext<'_>) -> f32 {
    context.population.enemy_exclusion_rooms * context.grid.room_size()
}

pub(super) fn sample_enemy_cell(
    context: &PlacementContext<'_>,
    rng: &mut LevelRng,
) -> Result<Cell, PlacementError> {
    let exclusion = enemy_exclusion_radius(context);
    let retry_cap = context.population.retry_cap;
    for _ in 0..retry_cap {
        let cell = random_cell(context.grid, rng);
        if !context.grid.is_room(cell) {
            continue;
        }
        let distance = actor_position(context, cell).distance(context.player_start.position);
        if distance > exclusion {
            return Ok(cell);
        }
    }
    Err(PlacementError::PlacementFailed { kind: ActorKind::Enemy, attempts: retry_cap })
}

pub(super) fn sample_pickup(
    context: &PlacementContext<'_>,
    kind: ActorKind,
    rng: &mut LevelRng,
) -> Result<ActorPlacement, PlacementError> {
    let retry_cap = context.population.retry_cap;
    for _ in 0..retry_cap {
        let cell = random_cell(context.grid, rng);
        if !context.grid.is_room(cell) {
            continue;
        }
        let jitter = context.grid.room_size() * context.population.pickup_jitter_fraction;
        let offset = Vec3::new(rng.range_f32(-jitter, jitter), 0.0, rng.range_f32(-jitter, jitter));
        return Ok(ActorPlacement {
            kind,
            cell,
            position: actor_position(context, cell) + offset,
            enemy: None,
        });
    }
    Err(PlacementError::PlacementFailed { kind, attempts: retry_cap })
}
