//! High-level level generation orchestration that composes layout, boundaries, and placement.

use glam::Vec3;
use log::{info, warn};

use crate::config::LevelConfig;
use crate::difficulty::{DifficultyTracker, StatScaler};
use crate::error::LevelError;
use crate::rng::{BOUNDARY_STREAM, LAYOUT_STREAM, LevelRng, PLACEMENT_STREAM};

use super::boundary::{BoundaryPlacement, resolve_boundaries};
use super::grid::Grid;
use super::layout::build_room_layout;
use super::model::{GeneratedLevel, PlayerStart};
use super::placement::{PlacementContext, populate};

pub struct LevelGenerator {
    config: LevelConfig,
    seed: u64,
}

impl LevelGenerator {
    pub fn new(config: LevelConfig, seed: u64) -> Result<Self, LevelError> {
        config.validate()?;
        Ok(Self { config, seed })
    }

    pub fn generate(&self) -> Result<GeneratedLevel, LevelError> {
        let config = &self.config;
        let (grid, layout) =
            build_room_layout(config, &mut LevelRng::for_stream(self.seed, LAYOUT_STREAM));
        if grid.room_count() == 0 {
            return Err(LevelError::EmptyGrid);
        }

        let boundaries = self.resolve_boundaries(&grid);

        let player_start = PlayerStart {
            cell: layout.player_start,
            position: grid
                .cell_to_world(layout.player_start)
                .with_y(config.population.spawn_height),
            forward: Vec3::Z,
        };

        let mut difficulty = DifficultyTracker::from_config(&config.difficulty);
        let scaler = StatScaler::from_config(&config.difficulty);
        let population = populate(
            &PlacementContext { grid: &grid, population: &config.population, player_start },
            &mut difficulty,
            &scaler,
            &mut LevelRng::for_stream(self.seed, PLACEMENT_STREAM),
        );

        let level = GeneratedLevel {
            seed: self.seed,
            grid,
            room_seeds: layout.room_seeds,
            player_start,
            boundaries,
            actors: population.actors,
            placement_failures: population.failures,
            enemies_to_win: population.enemies_to_win,
            difficulty,
        };

        if !level.player_start_connected() {
            warn!(
                "player start {:?} is not connected to the room network (seed {})",
                level.player_start.cell, self.seed
            );
        }
        info!(
            "generated level seed={} rooms={} boundaries={} actors={} failures={} fingerprint={:#018x}",
            self.seed,
            level.grid.room_count(),
            level.boundaries.len(),
            level.actors.len(),
            level.placement_failures.len(),
            level.fingerprint()
        );
        Ok(level)
    }

    /// Re-resolves boundaries for `grid` from this generator's boundary stream.
    /// Calling it twice on the same grid yields identical sequences.
    pub fn resolve_boundaries(&self, grid: &Grid) -> Vec<BoundaryPlacement> {
        resolve_boundaries(
            grid,
            self.config.boundary.door_probability,
            &mut LevelRng::for_stream(self.seed, BOUNDARY_STREAM),
        )
    }
}
