use rand::Rng;
use serde::Serialize;

use crate::game::entities::{Robot, Tile};
use crate::game::grid::GridMap;
use crate::game::event_log::EventLog;
use crate::game::systems::apply_move_rules;
use crate::game::types::Direction;

/// Everything one game owns. Built once and handed to the turn loop.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub map: GridMap,
    pub robot: Robot,
    pub log: EventLog,
    pub turn: u32,
}

impl GameState {
    // Random map, fresh robot
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::from_parts(GridMap::generate(width, height, rng), Robot::new())
    }

    pub fn from_parts(map: GridMap, robot: Robot) -> Self {
        GameState {
            map,
            robot,
            log: EventLog::new(),
            turn: 0,
        }
    }

    /// Play one accepted move and return the tile it resolved to.
    pub fn play_turn(&mut self, direction: Direction) -> Tile {
        let tile = apply_move_rules(self, direction);
        self.turn += 1;
        tile
    }
}
