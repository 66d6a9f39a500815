//! Robot movement system.
//!
//! This module computes single steps on a bounded grid.

use crate::game::types::{Direction, Position};

/// One step from `pos` in `direction`.
/// Returns `None` when the step would leave a `width` x `height` grid.
pub fn step(pos: Position, direction: Direction, width: usize, height: usize) -> Option<Position> {
    let mut new_pos = pos;

    match direction {
        Direction::Up => {
            if pos.y == 0 { return None; }
            new_pos.y -= 1;
        }
        Direction::Down => {
            if pos.y + 1 >= height { return None; }
            new_pos.y += 1;
        }
        Direction::Left => {
            if pos.x == 0 { return None; }
            new_pos.x -= 1;
        }
        Direction::Right => {
            if pos.x + 1 >= width { return None; }
            new_pos.x += 1;
        }
    }

    Some(new_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let center = Position { x: 1, y: 1 };
        assert_eq!(step(center, Direction::Up, 3, 3), Some(Position { x: 1, y: 0 }));
        assert_eq!(step(center, Direction::Down, 3, 3), Some(Position { x: 1, y: 2 }));
        assert_eq!(step(center, Direction::Left, 3, 3), Some(Position { x: 0, y: 1 }));
        assert_eq!(step(center, Direction::Right, 3, 3), Some(Position { x: 2, y: 1 }));
    }

    #[test]
    fn test_step_off_every_edge() {
        assert_eq!(step(Position { x: 0, y: 0 }, Direction::Up, 3, 2), None);
        assert_eq!(step(Position { x: 0, y: 0 }, Direction::Left, 3, 2), None);
        assert_eq!(step(Position { x: 2, y: 1 }, Direction::Right, 3, 2), None);
        assert_eq!(step(Position { x: 2, y: 1 }, Direction::Down, 3, 2), None);
    }
}
