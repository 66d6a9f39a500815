//! Robot entity logic.
//!
//! The robot carries a single bounded energy pool that every tile it
//! resolves adds to or drains.

use log::debug;
use serde::Serialize;

use crate::config::game::{MAX_ENERGY, START_ENERGY};
use crate::game::entities::tile::Tile;
use crate::game::event_log::EventLog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robot {
    energy: u32,
    max_energy: u32,
}

impl Robot {
    pub fn new() -> Self {
        Self::with_energy(START_ENERGY, MAX_ENERGY)
    }

    /// Build a robot with a custom charge, clamped to `max_energy`.
    pub fn with_energy(energy: u32, max_energy: u32) -> Self {
        Self {
            energy: energy.min(max_energy),
            max_energy,
        }
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn is_depleted(&self) -> bool {
        self.energy == 0
    }

    /// Apply a tile's energy effect and queue its message.
    /// Energy stays within `[0, max_energy]`.
    pub fn apply_tile(&mut self, tile: Tile, log: &mut EventLog) {
        let updated = i64::from(self.energy) + i64::from(tile.energy_delta);
        self.energy = updated.clamp(0, i64::from(self.max_energy)) as u32;
        debug!("[Robot] Tile '{}' applied, energy now {}/{}", tile.glyph, self.energy, self.max_energy);
        log.push(tile.message);
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}
