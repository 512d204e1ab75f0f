//! Core domain types for N×N tic-tac-toe.

use crate::action::MoveError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// One of the two seats at the table.
///
/// Seat one always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Seat {
    /// First player (id 1).
    #[display("Player One")]
    One,
    /// Second player (id 2).
    #[display("Player Two")]
    Two,
}

impl Seat {
    /// Stable numeric id: 1 or 2.
    pub fn id(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Contribution of one mark to a line counter.
    pub fn weight(self) -> i64 {
        match self {
            Seat::One => 1,
            Seat::Two => -1,
        }
    }
}

/// A player profile: who sits in a seat and how their marks are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat this player occupies.
    seat: Seat,
    /// Display name used in prompts and results.
    name: String,
    /// Symbol rendered on the board.
    symbol: char,
}

impl Player {
    /// Creates a new player profile.
    #[instrument(skip(name))]
    pub fn new(seat: Seat, name: impl AsRef<str>, symbol: char) -> Self {
        Self {
            seat,
            name: name.as_ref().to_string(),
            symbol,
        }
    }
}

/// The two players of a game, fixed for the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    /// Creates the roster from the name and symbol of each seat.
    pub fn new(
        one_name: impl AsRef<str>,
        one_symbol: char,
        two_name: impl AsRef<str>,
        two_symbol: char,
    ) -> Self {
        Self {
            one: Player::new(Seat::One, one_name, one_symbol),
            two: Player::new(Seat::Two, two_name, two_symbol),
        }
    }

    /// Returns the player sitting in `seat`.
    pub fn get(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.one,
            Seat::Two => &self.two,
        }
    }

    /// Iterates over the players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> + '_ {
        Seat::iter().map(|seat| self.get(seat))
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("User 1", 'O', "User 2", 'X')
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a seat.
    Occupied(Seat),
}

impl Square {
    /// Numeric occupant id, 0 when empty.
    pub fn id(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(seat) => seat.id(),
        }
    }

    /// Returns the occupant, if any.
    pub fn seat(self) -> Option<Seat> {
        match self {
            Square::Empty => None,
            Square::Occupied(seat) => Some(seat),
        }
    }
}

/// A cell coordinate, row first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// N×N board stored densely in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    occupied: usize,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// Callers go through `GameEngine`, which bounds `size` to
    /// `MIN_SIZE..=MAX_SIZE` first.
    #[instrument]
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
            occupied: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major index of `coord`, or `None` when it lies off the board.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    /// Converts signed input coordinates into a board coordinate.
    pub fn coord(&self, row: i64, col: i64) -> Option<Coord> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let coord = Coord::new(row, col);
        self.index(coord).map(|_| coord)
    }

    /// Gets the square at `coord`.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.index(coord).map(|i| self.squares[i])
    }

    /// Checks if the square at `coord` exists and is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Marks `coord` for `seat`.
    ///
    /// # Errors
    ///
    /// Fails when the coordinate is off the board or already taken.
    pub(crate) fn place(&mut self, coord: Coord, seat: Seat) -> Result<(), MoveError> {
        let index = self.index(coord).ok_or_else(|| MoveError::out_of_range(coord, self.size))?;
        if self.squares[index] != Square::Empty {
            return Err(MoveError::CellTaken(coord));
        }
        self.squares[index] = Square::Occupied(seat);
        self.occupied += 1;
        Ok(())
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == self.squares.len()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over occupied squares with their coordinates.
    pub fn marks(&self) -> impl Iterator<Item = (Coord, Seat)> + '_ {
        self.squares.iter().enumerate().filter_map(|(i, square)| {
            square
                .seat()
                .map(|seat| (Coord::new(i / self.size, i % self.size), seat))
        })
    }
}
