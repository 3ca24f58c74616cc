//! Procedural level generation split into coherent submodules.

pub mod boundary;
pub mod grid;
pub mod model;

mod generator;
mod layout;
mod placement;

pub use boundary::{BoundaryDecision, BoundaryKind, BoundaryPlacement};
pub use generator::LevelGenerator;
pub use grid::Grid;
pub use model::{ActorPlacement, EnemyProfile, GeneratedLevel, PlayerStart};

use crate::config::LevelConfig;
use crate::error::LevelError;

pub fn generate_level(config: LevelConfig, seed: u64) -> Result<GeneratedLevel, LevelError> {
    LevelGenerator::new(config, seed)?.generate()
}
