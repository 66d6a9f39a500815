use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Match a normalized direction word ("Up", "Down", "Left", "Right").
    pub fn from_keyword(word: &str) -> Option<Direction> {
        match word {
            "Up" => Some(Direction::Up),
            "Down" => Some(Direction::Down),
            "Left" => Some(Direction::Left),
            "Right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One accepted line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Terminal states of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

impl Outcome {
    /// Message printed when the game ends. Quitting is silent.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Won => Some("You collected all of the batteries... YOU WIN !"),
            Outcome::Lost => Some("You ran out of batteries... YOU LOST !"),
            Outcome::Quit => None,
        }
    }
}
