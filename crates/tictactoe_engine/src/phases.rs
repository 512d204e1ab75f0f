//! Game phases and move outcomes.

use crate::types::Seat;
use serde::{Deserialize, Serialize};

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on.
    Continue,
    /// The move completed a line.
    Won(Seat),
    /// The move filled the board without completing a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Won(seat) => Some(*seat),
            Outcome::Continue | Outcome::Draw => None,
        }
    }

    /// Returns true if the move ended the game.
    pub fn is_ended(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Game continues"),
            Outcome::Won(seat) => write!(f, "{} wins", seat),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current phase of the game.
///
/// `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given seat to move.
    AwaitingMove(Seat),
    /// A seat completed a line.
    Won(Seat),
    /// The board filled up with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}
