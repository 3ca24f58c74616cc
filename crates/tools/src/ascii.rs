//! Top-down text rendering of a generated level. Row 0 is the lowest z.

use levelgen::{ActorKind, Cell, GeneratedLevel};

const SOLID: char = '#';
const ROOM: char = '.';

fn marker(kind: ActorKind) -> char {
    match kind {
        ActorKind::Player => '@',
        ActorKind::Enemy => 'E',
        ActorKind::HealthPickup => '+',
        ActorKind::AmmoPickup => '*',
    }
}

/// One line per grid row. When several actors share a cell the earliest placed wins.
pub fn render(level: &GeneratedLevel) -> String {
    let grid = &level.grid;
    let mut rows: Vec<Vec<char>> = (0..grid.length() as i32)
        .map(|z| {
            (0..grid.width() as i32)
                .map(|x| if grid.is_room(Cell::new(x, z)) { ROOM } else { SOLID })
                .collect()
        })
        .collect();

    for actor in &level.actors {
        if !grid.in_bounds(actor.cell) {
            continue;
        }
        let slot = &mut rows[actor.cell.z as usize][actor.cell.x as usize];
        if *slot == ROOM {
            *slot = marker(actor.kind);
        }
    }

    let mut out = String::with_capacity((grid.width() + 1) * grid.length());
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use levelgen::{LevelConfig, generate_level};

    use super::*;

    #[test]
    fn render_matches_grid_shape_and_marks_player() {
        let level = generate_level(LevelConfig::default(), 12).expect("level");
        let text = render(&level);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), level.grid.length());
        assert!(lines.iter().all(|line| line.chars().count() == level.grid.width()));

        let start = level.player_start.cell;
        let player_row = lines[start.z as usize];
        assert_eq!(player_row.chars().nth(start.x as usize), Some('@'));
        assert_eq!(text.matches('@').count(), 1);
    }

    #[test]
    fn solid_cells_render_as_solid() {
        let level = generate_level(LevelConfig::default(), 3).expect("level");
        let text = render(&level);
        let solid = level.grid.width() * level.grid.length() - level.grid.room_count();
        assert_eq!(text.matches(SOLID).count(), solid);
        assert!(text.lines().next().is_some_and(|border| border.chars().all(|c| c == SOLID)));
    }
}
