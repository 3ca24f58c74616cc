//! Cross-shaped skeleton, room scattering, and L-shaped connectors.
//! Every scattered room is joined to the skeleton as it is placed, so the
//! network stays connected after each insertion.

use glam::Vec3;
use log::debug;

use crate::config::LevelConfig;
use crate::rng::LevelRng;
use crate::types::Cell;

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct RoomLayout {
    pub(super) room_seeds: Vec<Cell>,
    pub(super) player_start: Cell,
}

pub(super) fn build_room_layout(config: &LevelConfig, rng: &mut LevelRng) -> (Grid, RoomLayout) {
    let mut grid = Grid::new(config.grid.width, config.grid.length, config.grid.room_size);
    mark_skeleton(&mut grid);

    let room_count = rng.range_usize(config.rooms.min_rooms, config.rooms.max_rooms);
    let mut room_seeds = Vec::with_capacity(room_count);
    for _ in 0..room_count {
        let seed = random_interior_cell(&grid, rng);
        grid.set_room(seed);
        let horizontal_first = rng.chance(0.5);
        connect_to_skeleton(&mut grid, seed, horizontal_first);
        room_seeds.push(seed);
    }

    let player_start = player_start_cell(&grid, config.population.player_start);
    grid.set_room(player_start);

    debug!(
        "layout: {}x{} grid, {} room seeds, {} room cells, player start {:?}",
        grid.width(),
        grid.length(),
        room_seeds.len(),
        grid.room_count(),
        player_start
    );

    (grid, RoomLayout { room_seeds, player_start })
}

/// Floor-divides the requested world position and clamps it into the interior.
pub(super) fn player_start_cell(grid: &Grid, requested: Vec3) -> Cell {
    let x = (requested.x / grid.room_size()).floor() as i64;
    let z = (requested.z / grid.room_size()).floor() as i64;
    Cell {
        x: x.clamp(1, grid.width() as i64 - 2) as i32,
        z: z.clamp(1, grid.length() as i64 - 2) as i32,
    }
}

fn mark_skeleton(grid: &mut Grid) {
    for cell in grid.skeleton_cells() {
        grid.set_room(cell);
    }
}

fn random_interior_cell(grid: &Grid, rng: &mut LevelRng) -> Cell {
    Cell {
        x: rng.range_i32(1, grid.width() as i32 - 2),
        z: rng.range_i32(1, grid.length() as i32 - 2),
    }
}

fn connect_to_skeleton(grid: &mut Grid, room: Cell, horizontal_first: bool) {
    let column = grid.skeleton_column();
    let row = grid.skeleton_row();
    if horizontal_first {
        carve_horizontal_line(grid, room.z, room.x, column);
        carve_vertical_line(grid, column, room.z, row);
    } else {
        carve_vertical_line(grid, room.x, room.z, row);
        carve_horizontal_line(grid, row, room.x, column);
    }
}

fn carve_horizontal_line(grid: &mut Grid, z: i32, from_x: i32, to_x: i32) {
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        grid.set_room(Cell { x, z });
    }
}

fn carve_vertical_line(grid: &mut Grid, x: i32, from_z: i32, to_z: i32) {
    for z in from_z.min(to_z)..=from_z.max(to_z) {
        grid.set_room(Cell { x, z });
    }
}
