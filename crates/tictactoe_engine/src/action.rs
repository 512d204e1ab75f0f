//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which seat
//! marked which cell and can be reasoned about after the fact.

use crate::types::{Coord, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest board the game can be played on.
pub const MIN_SIZE: usize = 3;

/// Largest board the game can be played on.
pub const MAX_SIZE: usize = 100;

/// Board size used when the player does not pick one.
pub const DEFAULT_SIZE: usize = 3;

/// A move: a seat placing its mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// The cell being marked.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(seat: Seat, coord: Coord) -> Self {
        Self { seat, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.coord)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Side length of the board.
        size: usize,
    },

    /// The cell is already occupied.
    #[display("Position {} is already taken", _0)]
    CellTaken(Coord),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Builds an [`MoveError::OutOfRange`] for a board coordinate.
    pub(crate) fn out_of_range(coord: Coord, size: usize) -> Self {
        MoveError::OutOfRange {
            row: i64::try_from(coord.row).unwrap_or(i64::MAX),
            col: i64::try_from(coord.col).unwrap_or(i64::MAX),
            size,
        }
    }
}

impl std::error::Error for MoveError {}

/// Error raised when configuring a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SizeError {
    /// The requested size is below [`MIN_SIZE`].
    #[display("Board size {} is too small, it needs to be >= {}", _0, MIN_SIZE)]
    TooSmall(usize),

    /// The requested size is above [`MAX_SIZE`].
    #[display("Board size {} is too large, it needs to be <= {}", _0, MAX_SIZE)]
    TooLarge(usize),
}

impl std::error::Error for SizeError {}
