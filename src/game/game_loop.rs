//! Turn loop.
//!
//! Checks for a terminal state, draws the board, reads one command and
//! plays it, until the game is won, lost or abandoned.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::config::game::PROMPT;
use crate::game::state::GameState;
use crate::game::systems::{check_outcome, Visualizer};
use crate::game::types::{Command, Outcome};

/// Prompt for and read one raw line. `None` at end of input.
/// Bytes that are not UTF-8 are replaced, never rejected.
fn get_player_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Run the game until it reaches a terminal state and return that state.
/// End of input counts as quitting.
pub fn run_game_loop<R: BufRead, W: Write>(
    game_state: &mut GameState,
    input: &mut R,
    out: &mut W,
    visualizer: &Visualizer,
) -> io::Result<Outcome> {
    let outcome = loop {
        if let Some(outcome) = check_outcome(game_state) {
            break outcome;
        }

        visualizer.display(out, game_state)?;

        let Some(line) = get_player_input(input, out)? else {
            debug!("[Game] End of input, quitting");
            break Outcome::Quit;
        };

        match Command::parse(&line) {
            Some(Command::Quit) => break Outcome::Quit,
            Some(Command::Move(direction)) => {
                game_state.play_turn(direction);
            }
            None => debug!("[Game] Ignored input {:?}", line.trim_end()),
        }
    };

    if let Some(message) = outcome.message() {
        writeln!(out, "{}", message)?;
    }
    out.flush()?;
    info!(
        "[Game] Finished with {:?} after {} turns, energy {}/{}",
        outcome,
        game_state.turn,
        game_state.robot.energy(),
        game_state.robot.max_energy()
    );
    Ok(outcome)
}
