//! Pure N×N tic-tac-toe game logic.
//!
//! Two seats take turns marking cells on a square board of side N ≥ 3.
//! Completing any row, column or full-length diagonal wins; filling the
//! board without doing so is a draw.
//!
//! Win detection is incremental: each line keeps a signed counter (+1 for
//! seat one, −1 for seat two) and a move only inspects the lines through
//! its own cell. See [`LineCounters`].
//!
//! This crate performs no I/O. A driver feeds it coordinates through
//! [`GameEngine::validate_move`] and [`GameEngine::apply_move`], advances
//! the turn with [`GameEngine::advance_turn`], and renders the board via
//! [`GameEngine::current_cell`].

mod action;
mod counters;
mod engine;
mod phases;
mod types;

pub mod invariants;

pub use action::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Move, MoveError, SizeError};
pub use counters::{LineCounters, LineId};
pub use engine::{GameEngine, ReplayError};
pub use phases::{GameStatus, Outcome};
pub use types::{Board, Coord, Player, Players, Seat, Square};
