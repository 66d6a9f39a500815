use crate::game::entities::Tile;
use crate::game::state::GameState;
use crate::game::types::{Direction, Outcome};

/// Resolve one move: the grid decides where the robot lands and the robot
/// takes the landed tile's effect.
pub fn apply_move_rules(game_state: &mut GameState, direction: Direction) -> Tile {
    let tile = game_state.map.attempt_move(direction);
    game_state.robot.apply_tile(tile, &mut game_state.log);
    tile
}

/// Terminal state reached by the current board, if any.
/// Winning is checked before losing.
pub fn check_outcome(game_state: &GameState) -> Option<Outcome> {
    if !game_state.map.has_collectibles() {
        return Some(Outcome::Won);
    }
    if game_state.robot.is_depleted() {
        return Some(Outcome::Lost);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::Robot;
    use crate::game::grid::GridMap;
    use crate::game::types::Position;

    #[test]
    fn test_win_checked_before_loss() {
        let state = GameState::from_parts(GridMap::filled(2, 2, Tile::EMPTY), Robot::with_energy(0, 10));
        assert_eq!(check_outcome(&state), Some(Outcome::Won));
    }

    #[test]
    fn test_loss_when_depleted_with_collectibles_left() {
        let state = GameState::from_parts(GridMap::filled(2, 2, Tile::BATTERY), Robot::with_energy(0, 10));
        assert_eq!(check_outcome(&state), Some(Outcome::Lost));
    }

    #[test]
    fn test_running_while_collectibles_and_energy_remain() {
        let mut map = GridMap::filled(3, 3, Tile::HAZARD);
        map.set_tile(Position { x: 0, y: 0 }, Tile::BOOSTER);
        let state = GameState::from_parts(map, Robot::with_energy(1, 10));
        assert_eq!(check_outcome(&state), None);
    }

    #[test]
    fn test_apply_move_rules_updates_robot_and_log() {
        let mut map = GridMap::filled(3, 3, Tile::EMPTY);
        map.set_tile(Position { x: 1, y: 2 }, Tile::BATTERY);
        let mut state = GameState::from_parts(map, Robot::new());

        assert_eq!(apply_move_rules(&mut state, Direction::Down), Tile::BATTERY);
        assert_eq!(state.robot.energy(), 6);
        assert_eq!(apply_move_rules(&mut state, Direction::Down), Tile::WALL);
        assert_eq!(state.robot.energy(), 5);
        assert_eq!(state.log.drain(), vec!["A battery ! + 1 energy", "You hurt yourself on wall !"]);
    }
}
