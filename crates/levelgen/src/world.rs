//! Flat-floor `SpawnWorld` backed directly by a generated grid.
//! Room cells are walkable floor at `floor_height`; every other cell is solid.
//! Hosts with real geometry supply their own implementation.

use glam::Vec3;

use crate::mapgen::Grid;
use crate::spawner::SpawnWorld;
use crate::types::Cell;

/// Keeps snapped points strictly inside a cell footprint.
const FOOTPRINT_MARGIN: f32 = 0.01;

#[derive(Clone, Copy, Debug)]
pub struct GridWorld<'a> {
    grid: &'a Grid,
    floor_height: f32,
}

impl<'a> GridWorld<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, floor_height: 0.0 }
    }

    pub fn with_floor_height(grid: &'a Grid, floor_height: f32) -> Self {
        Self { grid, floor_height }
    }

    fn is_walkable(&self, position: Vec3) -> bool {
        self.grid.is_room(self.grid.world_to_cell(position))
    }
}

impl SpawnWorld for GridWorld<'_> {
    fn ground_height(&self, probe_origin: Vec3, max_distance: f32) -> Option<f32> {
        let drop = probe_origin.y - self.floor_height;
        ((0.0..=max_distance).contains(&drop) && self.is_walkable(probe_origin))
            .then_some(self.floor_height)
    }

    fn nearest_navigable_point(&self, point: Vec3, radius: f32) -> Option<Vec3> {
        let room_size = self.grid.room_size();
        let half_extent = room_size * (0.5 - FOOTPRINT_MARGIN);
        let center = self.grid.world_to_cell(point);
        let reach = (radius / room_size).ceil() as i32 + 1;

        let mut best: Option<(f32, Vec3)> = None;
        for dx in -reach..=reach {
            for dz in -reach..=reach {
                let (Some(x), Some(z)) = (center.x.checked_add(dx), center.z.checked_add(dz))
                else {
                    continue;
                };
                let cell = Cell { x, z };
                if !self.grid.is_room(cell) {
                    continue;
                }
                let origin = self.grid.cell_to_world(cell);
                let snapped = Vec3::new(
                    point.x.clamp(origin.x - half_extent, origin.x + half_extent),
                    self.floor_height,
                    point.z.clamp(origin.z - half_extent, origin.z + half_extent),
                );
                let distance = snapped.with_y(0.0).distance(point.with_y(0.0));
                if distance <= radius && best.is_none_or(|(best_distance, _)| distance < best_distance)
                {
                    best = Some((distance, snapped));
                }
            }
        }
        best.map(|(_, snapped)| snapped)
    }

    /// Samples the segment at quarter-cell spacing; any solid sample blocks it.
    fn is_obstructed(&self, from: Vec3, to: Vec3) -> bool {
        let spacing = self.grid.room_size() * 0.25;
        let steps = ((to - from).length() / spacing).ceil().max(1.0) as u32;
        (0..=steps).any(|step| !self.is_walkable(from.lerp(to, step as f32 / steps as f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single row of rooms along x = 1..=8 at z = 1, room size 2.
    fn hallway() -> Grid {
        let mut grid = Grid::new(10, 3, 2.0);
        for x in 1..=8 {
            grid.set_room(Cell::new(x, 1));
        }
        grid
    }

    #[test]
    fn ground_probe_hits_only_room_floor_within_range() {
        let grid = hallway();
        let world = GridWorld::new(&grid);
        assert_eq!(world.ground_height(Vec3::new(4.0, 10.0, 2.0), 20.0), Some(0.0));
        assert_eq!(world.ground_height(Vec3::new(4.0, 10.0, 2.0), 5.0), None);
        assert_eq!(world.ground_height(Vec3::new(4.0, 10.0, 0.0), 20.0), None);
        assert_eq!(world.ground_height(Vec3::new(4.0, -1.0, 2.0), 20.0), None);
    }

    #[test]
    fn navigable_point_snaps_into_the_nearest_room() {
        let grid = hallway();
        let world = GridWorld::with_floor_height(&grid, 0.5);
        let snapped = world
            .nearest_navigable_point(Vec3::new(6.0, 3.0, 4.5), 5.0)
            .expect("hallway is within reach");
        assert_eq!(grid.world_to_cell(snapped), Cell::new(3, 1));
        assert_eq!(snapped.x, 6.0);
        assert_eq!(snapped.y, 0.5);
        assert!(snapped.z < 3.0);
    }

    #[test]
    fn navigable_point_respects_radius() {
        let grid = hallway();
        let world = GridWorld::new(&grid);
        assert!(world.nearest_navigable_point(Vec3::new(6.0, 0.0, 30.0), 5.0).is_none());
    }

    #[test]
    fn far_off_queries_find_nothing() {
        let grid = hallway();
        let world = GridWorld::new(&grid);
        for point in [Vec3::new(1.0e12, 0.0, 0.0), Vec3::new(-1.0e12, 0.0, 1.0e12)] {
            assert!(world.nearest_navigable_point(point, 5.0).is_none(), "{point:?}");
            assert_eq!(world.ground_height(point.with_y(10.0), 20.0), None);
        }
    }

    #[test]
    fn segments_through_solid_cells_are_obstructed() {
        let grid = hallway();
        let world = GridWorld::new(&grid);
        assert!(!world.is_obstructed(Vec3::new(2.0, 1.6, 2.0), Vec3::new(16.0, 1.0, 2.0)));
        assert!(world.is_obstructed(Vec3::new(2.0, 1.6, 2.0), Vec3::new(16.0, 1.0, 5.0)));
    }
}
