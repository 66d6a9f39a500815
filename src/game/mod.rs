pub mod types;
pub mod utils;
pub mod event_log;
pub mod state;
pub mod game_loop;

pub mod entities;
pub mod grid;
pub mod systems;
