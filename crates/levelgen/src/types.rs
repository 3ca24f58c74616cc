use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Integer grid coordinate. `x` runs along world X, `z` along world Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dz) = direction.offset();
        Self { x: self.x + dx, z: self.z + dz }
    }

    pub fn neighbors(self) -> [Cell; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

/// Axis-aligned neighbor direction on the grid plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +X
    East,
    /// -X
    West,
    /// +Z
    North,
    /// -Z
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::East, Direction::West, Direction::North, Direction::South];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    pub fn vector(self) -> Vec3 {
        let (dx, dz) = self.offset();
        Vec3::new(dx as f32, 0.0, dz as f32)
    }

    /// True for the directions that point toward increasing coordinates.
    pub const fn is_positive(self) -> bool {
        matches!(self, Direction::East | Direction::North)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
    HealthPickup,
    AmmoPickup,
}

impl ActorKind {
    pub fn is_pickup(self) -> bool {
        matches!(self, ActorKind::HealthPickup | ActorKind::AmmoPickup)
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            ActorKind::Player => 0,
            ActorKind::Enemy => 1,
            ActorKind::HealthPickup => 2,
            ActorKind::AmmoPickup => 3,
        }
    }
}
