use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::game::entities::Tile;
use crate::game::systems::movement::step;
use crate::game::types::{Direction, Position};

/// The playfield: a fully populated `width` x `height` grid of tiles plus
/// the robot's coordinate. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
    player: Position,
}

impl GridMap {
    /// Fill every cell independently from the spawn pool, weighted by
    /// `Tile::weight`. `rng` is the only source of randomness in the game.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| {
                *Tile::SPAWN_POOL
                    .choose_weighted(&mut *rng, |tile| tile.weight)
                    .unwrap_or(&Tile::EMPTY)
            })
            .collect();
        debug!("[Grid] Generated {}x{} map", width, height);
        Self::from_cells(width, height, cells)
    }

    /// A grid where every cell holds `tile`.
    #[cfg(test)]
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self::from_cells(width, height, vec![tile; width * height])
    }

    fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Self {
        Self {
            width,
            height,
            cells,
            player: Position { x: width / 2, y: height / 2 },
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn player(&self) -> Position {
        self.player
    }

    // Row-major offset. Callers keep `pos` inside the grid.
    fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    /// Tile stored at `pos`, which must lie inside the grid.
    pub fn cell(&self, pos: Position) -> Tile {
        self.cells[self.index(pos)]
    }

    #[cfg(test)]
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        let i = self.index(pos);
        self.cells[i] = tile;
    }

    #[cfg(test)]
    pub fn cells(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter()
    }

    pub fn has_element(&self, tile: Tile) -> bool {
        self.cells.iter().any(|cell| *cell == tile)
    }

    /// True while any Battery or Booster is left to pick up.
    pub fn has_collectibles(&self) -> bool {
        self.has_element(Tile::BATTERY) || self.has_element(Tile::BOOSTER)
    }

    /// Move the robot one cell and return the tile it landed on.
    ///
    /// Off-grid moves leave everything untouched and return `Tile::WALL`.
    /// Otherwise the landed tile is consumed (replaced by `Tile::EMPTY`),
    /// except hazards, which stay in place.
    pub fn attempt_move(&mut self, direction: Direction) -> Tile {
        let Some(target) = step(self.player, direction, self.width, self.height) else {
            debug!("[Grid] Move {:?} from {:?} blocked by wall", direction, self.player);
            return Tile::WALL;
        };

        let i = self.index(target);
        self.player = target;
        let landed = self.cells[i];
        if landed != Tile::HAZARD {
            self.cells[i] = Tile::EMPTY;
        }
        debug!("[Grid] Moved {:?} to {:?}, landed on '{}'", direction, target, landed.glyph);
        landed
    }
}
