//! Map element registry.
//!
//! Every kind of cell the robot can meet, with its glyph, energy effect,
//! log message and spawn weight.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub glyph: char,
    pub energy_delta: i32,
    pub message: &'static str,
    pub weight: u32,
}

impl Tile {
    pub const HAZARD: Tile = Tile {
        glyph: 'M',
        energy_delta: -2,
        message: "Hazard :(, you lost - 2 energy",
        weight: 2,
    };

    pub const EMPTY: Tile = Tile {
        glyph: ' ',
        energy_delta: -1,
        message: "Nothing...",
        weight: 5,
    };

    pub const BATTERY: Tile = Tile {
        glyph: '+',
        energy_delta: 1,
        message: "A battery ! + 1 energy",
        weight: 2,
    };

    pub const BOOSTER: Tile = Tile {
        glyph: 'x',
        energy_delta: 2,
        message: "B-b-b-b-b-booooster kill ! + 2 energy",
        weight: 1,
    };

    /// Render overlay for the robot. Never stored in a grid.
    pub const PLAYER: Tile = Tile {
        glyph: 'P',
        energy_delta: 0,
        message: "",
        weight: 0,
    };

    /// Returned when a move would leave the map. Never stored in a grid.
    pub const WALL: Tile = Tile {
        glyph: '.',
        energy_delta: -1,
        message: "You hurt yourself on wall !",
        weight: 0,
    };

    /// Tiles eligible for random placement.
    pub const SPAWN_POOL: [Tile; 4] = [Tile::HAZARD, Tile::EMPTY, Tile::BATTERY, Tile::BOOSTER];
}
