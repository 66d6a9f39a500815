//! Game systems: movement, turn rules and terminal rendering.

pub mod movement;
pub mod rules;
pub mod render;

pub use rules::*;
pub use render::*;
