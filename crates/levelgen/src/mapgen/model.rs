//! Public data models for generated levels and their actor placements.

use glam::Vec3;
use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::difficulty::{DifficultyTracker, EnemyStats, StatMultipliers};
use crate::error::PlacementError;
use crate::types::{ActorKind, Cell};

use super::boundary::{BoundaryKind, BoundaryPlacement};
use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnemyProfile {
    pub difficulty_level: u32,
    pub multipliers: StatMultipliers,
    pub stats: EnemyStats,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorPlacement {
    pub kind: ActorKind,
    pub cell: Cell,
    pub position: Vec3,
    /// Present only for enemies.
    pub enemy: Option<EnemyProfile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerStart {
    pub cell: Cell,
    pub position: Vec3,
    pub forward: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedLevel {
    pub seed: u64,
    pub grid: Grid,
    pub room_seeds: Vec<Cell>,
    pub player_start: PlayerStart,
    pub boundaries: Vec<BoundaryPlacement>,
    /// Player first, then enemies, then health and ammo pickups.
    pub actors: Vec<ActorPlacement>,
    pub placement_failures: Vec<PlacementError>,
    /// Number of enemies the initial population was asked for.
    pub enemies_to_win: usize,
    /// Difficulty state after initial population.
    pub difficulty: DifficultyTracker,
}

impl GeneratedLevel {
    pub fn actors_of(&self, kind: ActorKind) -> impl Iterator<Item = &ActorPlacement> + '_ {
        self.actors.iter().filter(move |actor| actor.kind == kind)
    }

    /// Whether the player start cell belongs to the skeleton's connected network.
    pub fn player_start_connected(&self) -> bool {
        let anchor = Cell { x: self.grid.skeleton_column(), z: self.grid.skeleton_row() };
        self.grid.reachable_from(anchor).contains(&self.player_start.cell)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        self.grid.canonical_bytes(&mut bytes);

        bytes.extend(self.player_start.cell.x.to_le_bytes());
        bytes.extend(self.player_start.cell.z.to_le_bytes());

        bytes.extend((self.boundaries.len() as u32).to_le_bytes());
        for boundary in &self.boundaries {
            bytes.extend(boundary.cell.x.to_le_bytes());
            bytes.extend(boundary.cell.z.to_le_bytes());
            bytes.push(boundary.direction as u8);
            bytes.push(match boundary.kind {
                BoundaryKind::Wall => 0,
                BoundaryKind::Door => 1,
            });
        }

        bytes.extend((self.actors.len() as u32).to_le_bytes());
        for actor in &self.actors {
            bytes.push(actor.kind.code());
            bytes.extend(actor.cell.x.to_le_bytes());
            bytes.extend(actor.cell.z.to_le_bytes());
            for component in actor.position.to_array() {
                bytes.extend(component.to_le_bytes());
            }
            if let Some(enemy) = &actor.enemy {
                bytes.extend(enemy.difficulty_level.to_le_bytes());
                bytes.extend(enemy.stats.health.to_le_bytes());
                bytes.extend(enemy.stats.damage.to_le_bytes());
            }
        }

        bytes.extend((self.placement_failures.len() as u32).to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
