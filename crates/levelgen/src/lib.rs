pub mod config;
pub mod difficulty;
pub mod error;
pub mod mapgen;
pub mod rng;
pub mod session;
pub mod spawner;
pub mod types;
pub mod world;

pub use config::LevelConfig;
pub use difficulty::{DifficultyTracker, EnemyStats, StatMultipliers, StatScaler};
pub use error::{ConfigError, LevelError, PlacementError};
pub use mapgen::{GeneratedLevel, Grid, LevelGenerator, generate_level};
pub use rng::LevelRng;
pub use session::LevelSession;
pub use spawner::{EnemyId, PlayerPose, RuntimeSpawner, SpawnOutcome, SpawnWorld};
pub use types::*;
pub use world::GridWorld;
