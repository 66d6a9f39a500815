/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimensions,
/// robot energy and display pacing.
pub const GRID_WIDTH: usize = 5; // Number of columns in the game grid.

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 5;

/// Energy the robot starts with.
pub const START_ENERGY: u32 = 5;

/// Energy capacity of the robot.
pub const MAX_ENERGY: u32 = 10;

/// Pause (in milliseconds) between clearing the screen and drawing the board.
pub const RENDER_DELAY_MS: u64 = 100;

/// Text shown before reading each command.
pub const PROMPT: &str = "Your Input: ";

/// Environment variable holding an optional `u64` map seed.
pub const SEED_ENV_VAR: &str = "ROBOT_GRID_SEED";
