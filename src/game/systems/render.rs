//! Game rendering system (terminal).
//!
//! This module draws the energy bar, the grid and pending log messages.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::game::entities::{Robot, Tile};
use crate::game::grid::GridMap;
use crate::game::event_log::EventLog;
use crate::game::state::GameState;
use crate::game::types::Position;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal display. Drawn once per turn before input is read.
#[derive(Debug, Clone, Copy)]
pub struct Visualizer {
    pub render_delay: Duration,
}

impl Visualizer {
    pub fn new(render_delay: Duration) -> Self {
        Self { render_delay }
    }

    /// Clear the screen, pause, then draw the whole board and flush the log.
    pub fn display<W: Write>(&self, out: &mut W, game_state: &mut GameState) -> io::Result<()> {
        write!(out, "{}", CLEAR_SCREEN)?;
        out.flush()?;
        if !self.render_delay.is_zero() {
            thread::sleep(self.render_delay);
        }
        print_energy(out, &game_state.robot)?;
        print_grid(out, &game_state.map)?;
        print_logs(out, &mut game_state.log)?;
        out.flush()
    }
}

/// Print the energy bar, e.g. `[ x x x _ _ ]  3/5 Batteries`.
pub fn print_energy<W: Write>(out: &mut W, robot: &Robot) -> io::Result<()> {
    let filled = "x ".repeat(robot.energy() as usize);
    let empty = "_ ".repeat((robot.max_energy() - robot.energy()) as usize);
    writeln!(out)?;
    writeln!(out, "[ {}{}]  {}/{} Batteries", filled, empty, robot.energy(), robot.max_energy())?;
    writeln!(out)
}

/// Print the bordered grid with the robot drawn over its cell.
pub fn print_grid<W: Write>(out: &mut W, map: &GridMap) -> io::Result<()> {
    let border = format!("\t {}", "-".repeat(map.width() * 2));
    writeln!(out, "{}", border)?;
    for y in 0..map.height() {
        let mut row = String::from("\t| ");
        for x in 0..map.width() {
            let pos = Position { x, y };
            let tile = if pos == map.player() { Tile::PLAYER } else { map.cell(pos) };
            row.push(tile.glyph);
            row.push(' ');
        }
        row.push('|');
        writeln!(out, "{}", row)?;
    }
    writeln!(out, "{}", border)?;
    writeln!(out)
}

/// Print and clear every pending message.
pub fn print_logs<W: Write>(out: &mut W, log: &mut EventLog) -> io::Result<()> {
    for message in log.drain() {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}
