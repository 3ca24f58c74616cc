//! Wall and door decisions for every edge of every room cell.
//! Edges between two rooms are owned by the cell on their negative side, so a
//! shared edge is decided once and never yields two dividers.

use glam::Vec3;
use serde::Serialize;

use crate::rng::LevelRng;
use crate::types::{Cell, Direction};

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BoundaryKind {
    Wall,
    Door,
}

/// Outcome for one edge of a room cell. `Open` means no divider at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BoundaryDecision {
    Divider(BoundaryKind),
    Open,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundaryPlacement {
    pub cell: Cell,
    pub direction: Direction,
    pub kind: BoundaryKind,
    pub position: Vec3,
    /// Unit facing vector; the divider looks along `direction`.
    pub orientation: Vec3,
}

/// Decides a single edge. Returns `None` when `cell` is not a room.
pub fn decide_boundary(
    grid: &Grid,
    cell: Cell,
    direction: Direction,
    door_probability: f32,
    rng: &mut LevelRng,
) -> Option<BoundaryDecision> {
    if !grid.is_room(cell) {
        return None;
    }
    let neighbor = cell.step(direction);
    if !grid.is_room(neighbor) {
        return Some(BoundaryDecision::Divider(BoundaryKind::Wall));
    }
    if rng.chance(door_probability) {
        Some(BoundaryDecision::Divider(BoundaryKind::Door))
    } else {
        Some(BoundaryDecision::Open)
    }
}

pub fn resolve_boundaries(
    grid: &Grid,
    door_probability: f32,
    rng: &mut LevelRng,
) -> Vec<BoundaryPlacement> {
    let mut placements = Vec::new();
    for cell in grid.room_cells() {
        for direction in Direction::ALL {
            if !direction.is_positive() && grid.is_room(cell.step(direction)) {
                continue;
            }
            let Some(BoundaryDecision::Divider(kind)) =
                decide_boundary(grid, cell, direction, door_probability, rng)
            else {
                continue;
            };
            placements.push(BoundaryPlacement {
                cell,
                direction,
                kind,
                position: edge_position(grid, cell, direction),
                orientation: direction.vector(),
            });
        }
    }
    placements
}

pub fn edge_position(grid: &Grid, cell: Cell, direction: Direction) -> Vec3 {
    grid.cell_to_world(cell) + direction.vector() * (grid.room_size() / 2.0)
}
