use serde::Serialize;
use thiserror::Error;

use crate::types::ActorKind;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 3x3 to host an interior, got {width}x{length}")]
    GridTooSmall { width: usize, length: usize },
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite non-negative number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must lie within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },
    #[error("{name} must lie within (0, 180] degrees, got {value}")]
    AngleOutOfRange { name: &'static str, value: f32 },
}

/// A single actor that could not be placed within the retry cap.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum PlacementError {
    #[error("no valid cell for {kind:?} after {attempts} attempts")]
    PlacementFailed { kind: ActorKind, attempts: u32 },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum LevelError {
    #[error("invalid level configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("generated grid contains no room cells")]
    EmptyGrid,
}
