//! Main entry point for the robot grid game.
//!
//! Initializes logging, seeds the map generator, and runs the turn loop on
//! the terminal until the game is won, lost or quit.

use std::env;
use std::io;
use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::game::{GRID_HEIGHT, GRID_WIDTH, RENDER_DELAY_MS, SEED_ENV_VAR};
use game::game_loop::run_game_loop;
use game::state::GameState;
use game::systems::Visualizer;

pub mod config;
mod game;

/// Build the map RNG, seeded from the environment when a valid seed is set.
fn map_rng() -> StdRng {
    match env::var(SEED_ENV_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                info!("[Config] Using map seed {} from {}", seed, SEED_ENV_VAR);
                StdRng::seed_from_u64(seed)
            }
            Err(err) => {
                warn!("[Config] Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, err);
                StdRng::from_os_rng()
            }
        },
        Err(_) => StdRng::from_os_rng(),
    }
}

fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let mut rng = map_rng();
    let mut game_state = GameState::new(GRID_WIDTH, GRID_HEIGHT, &mut rng);
    let visualizer = Visualizer::new(Duration::from_millis(RENDER_DELAY_MS));
    info!("[Game] Started on a {}x{} map", GRID_WIDTH, GRID_HEIGHT);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game_loop(&mut game_state, &mut stdin.lock(), &mut stdout.lock(), &visualizer)?;

    if let Ok(snapshot) = serde_json::to_string(&game_state) {
        debug!("[Game] Final state: {}", snapshot);
    }
    Ok(())
}
