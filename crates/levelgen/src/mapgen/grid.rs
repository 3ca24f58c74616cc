//! Boolean room topology and the conversions between cell and world space.

use std::collections::{BTreeSet, VecDeque};

use glam::Vec3;
use serde::Serialize;

use crate::types::Cell;

/// `width × length` matrix of room flags. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    length: usize,
    room_size: f32,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, length: usize, room_size: f32) -> Self {
        Self { width, length, room_size, cells: vec![false; width * length] }
    }

    /// Builds a grid with exactly the given room cells; out-of-range cells are ignored.
    pub fn from_rooms(
        width: usize,
        length: usize,
        room_size: f32,
        rooms: impl IntoIterator<Item = Cell>,
    ) -> Self {
        let mut grid = Self::new(width, length, room_size);
        for cell in rooms {
            grid.set_room(cell);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn room_size(&self) -> f32 {
        self.room_size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.z >= 0
            && (cell.x as usize) < self.width
            && (cell.z as usize) < self.length
    }

    /// Inside the one-cell border reserved for outer walls.
    pub fn is_interior(&self, cell: Cell) -> bool {
        cell.x >= 1
            && cell.z >= 1
            && (cell.x as usize) + 1 < self.width
            && (cell.z as usize) + 1 < self.length
    }

    /// Out-of-range coordinates are never rooms.
    pub fn is_room(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|index| self.cells[index])
    }

    /// Returns true when the cell flipped from non-room to room.
    pub(crate) fn set_room(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(index) if !self.cells[index] => {
                self.cells[index] = true;
                true
            }
            _ => false,
        }
    }

    pub fn cell_to_world(&self, cell: Cell) -> Vec3 {
        Vec3::new(cell.x as f32 * self.room_size, 0.0, cell.z as f32 * self.room_size)
    }

    /// Cell whose footprint contains `position`; footprints are centred on cell origins.
    pub fn world_to_cell(&self, position: Vec3) -> Cell {
        Cell {
            x: (position.x / self.room_size).round() as i32,
            z: (position.z / self.room_size).round() as i32,
        }
    }

    pub fn room_count(&self) -> usize {
        self.cells.iter().filter(|&&is_room| is_room).count()
    }

    /// Room cells in x-major order, matching the order boundaries are emitted in.
    pub fn room_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.length).filter_map(move |z| {
                let cell = Cell { x: x as i32, z: z as i32 };
                self.is_room(cell).then_some(cell)
            })
        })
    }

    pub fn skeleton_column(&self) -> i32 {
        (self.width / 2) as i32
    }

    pub fn skeleton_row(&self) -> i32 {
        (self.length / 2) as i32
    }

    /// Cells of the cross-shaped backbone, spanning the interior only.
    pub fn skeleton_cells(&self) -> BTreeSet<Cell> {
        let row = self.skeleton_row();
        let column = self.skeleton_column();
        let horizontal = (1..self.width as i32 - 1).map(|x| Cell { x, z: row });
        let vertical = (1..self.length as i32 - 1).map(|z| Cell { x: column, z });
        horizontal.chain(vertical).collect()
    }

    /// Room cells reachable from `start` through 4-connected room cells.
    pub fn reachable_from(&self, start: Cell) -> BTreeSet<Cell> {
        if !self.is_room(start) {
            return BTreeSet::new();
        }

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(cell) = open.pop_front() {
            for next in cell.neighbors() {
                if seen.contains(&next) || !self.is_room(next) {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }
        seen
    }

    pub(crate) fn canonical_bytes(&self, bytes: &mut Vec<u8>) {
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.length as u32).to_le_bytes());
        bytes.extend(self.room_size.to_le_bytes());
        bytes.extend(self.cells.iter().map(|&is_room| u8::from(is_room)));
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell).then(|| (cell.z as usize) * self.width + (cell.x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_cells_are_never_rooms() {
        let mut grid = Grid::new(4, 3, 2.0);
        grid.set_room(Cell::new(0, 0));
        assert!(grid.is_room(Cell::new(0, 0)));
        for cell in [Cell::new(-1, 0), Cell::new(0, -1), Cell::new(4, 0), Cell::new(0, 3)] {
            assert!(!grid.is_room(cell), "{cell:?} should read as non-room");
            assert!(!grid.set_room(cell));
        }
        assert_eq!(grid.room_count(), 1);
    }

    #[test]
    fn empty_grids_have_no_interior() {
        for grid in [Grid::new(0, 0, 1.0), Grid::from_rooms(0, 4, 1.0, [Cell::new(1, 1)])] {
            assert!(!grid.is_interior(Cell::new(1, 1)));
            assert!(!grid.is_interior(Cell::new(0, 0)));
            assert_eq!(grid.room_count(), 0);
        }
        let grid = Grid::new(3, 3, 1.0);
        assert!(grid.is_interior(Cell::new(1, 1)));
        assert!(!grid.is_interior(Cell::new(2, 1)));
    }

    #[test]
    fn set_room_reports_only_the_first_flip() {
        let mut grid = Grid::new(5, 5, 1.0);
        assert!(grid.set_room(Cell::new(2, 2)));
        assert!(!grid.set_room(Cell::new(2, 2)));
    }

    #[test]
    fn world_conversion_round_trips_cell_origins() {
        let grid = Grid::new(10, 10, 5.0);
        let cell = Cell::new(3, 7);
        let origin = grid.cell_to_world(cell);
        assert_eq!(origin, Vec3::new(15.0, 0.0, 35.0));
        assert_eq!(grid.world_to_cell(origin), cell);
        assert_eq!(grid.world_to_cell(origin + Vec3::new(1.6, 4.0, -1.6)), cell);
    }

    #[test]
    fn skeleton_spans_interior_of_both_axes() {
        let grid = Grid::new(10, 8, 1.0);
        let skeleton = grid.skeleton_cells();
        assert_eq!(skeleton.len(), 8 + 6 - 1);
        assert!(skeleton.iter().all(|&cell| grid.is_interior(cell)));
        assert!(skeleton.contains(&Cell::new(5, 4)));
    }

    #[test]
    fn reachable_from_stops_at_non_room_cells() {
        let mut grid = Grid::new(6, 3, 1.0);
        for x in 0..3 {
            grid.set_room(Cell::new(x, 1));
        }
        grid.set_room(Cell::new(5, 1));
        let reached = grid.reachable_from(Cell::new(0, 1));
        assert_eq!(reached.len(), 3);
        assert!(!reached.contains(&Cell::new(5, 1)));
        assert!(grid.reachable_from(Cell::new(4, 1)).is_empty());
    }
}
