//! Game entities module.
//!
//! This module organizes the tile registry and the robot.

pub mod tile;
pub mod robot;

pub use tile::*;
pub use robot::*;
