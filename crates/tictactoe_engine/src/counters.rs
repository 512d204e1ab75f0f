//! Incremental line tallies for constant-time win detection.
//!
//! Every row, column and the two full-length diagonals keep a signed
//! counter: seat one adds 1 per mark, seat two subtracts 1. A line is
//! claimed once its counter reaches `+size` or `-size`, so a move only
//! has to look at the (at most four) lines running through its cell.

use crate::types::{Board, Coord, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Identifies one line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineId {
    /// A row.
    #[display("row {}", _0)]
    Row(usize),
    /// A column.
    #[display("column {}", _0)]
    Column(usize),
    /// Cells where `row + col == size - 1` (top-right to bottom-left).
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells where `row == col` (top-left to bottom-right).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineId {
    /// Lines passing through `coord` on a board of side `size`.
    ///
    /// The centre of an odd-sized board lies on both diagonals.
    pub fn through(coord: Coord, size: usize) -> impl Iterator<Item = LineId> {
        let main = (coord.row + coord.col + 1 == size).then_some(LineId::MainDiagonal);
        let anti = (coord.row == coord.col).then_some(LineId::AntiDiagonal);
        [
            Some(LineId::Row(coord.row)),
            Some(LineId::Column(coord.col)),
            main,
            anti,
        ]
        .into_iter()
        .flatten()
    }
}

/// Net mark count for every line of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounters {
    rows: Vec<i64>,
    columns: Vec<i64>,
    main_diagonal: i64,
    anti_diagonal: i64,
}

impl LineCounters {
    /// All-zero counters for a board of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![0; size],
            columns: vec![0; size],
            main_diagonal: 0,
            anti_diagonal: 0,
        }
    }

    /// Recomputes the counters from scratch by scanning `board`.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_board(board: &Board) -> Self {
        let mut counters = Self::new(board.size());
        for (coord, seat) in board.marks() {
            counters.add(coord, seat);
        }
        counters
    }

    /// Side length of the board these counters track.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Current value of `line`; lines off the board read as zero.
    pub fn get(&self, line: LineId) -> i64 {
        match line {
            LineId::Row(r) => self.rows.get(r).copied().unwrap_or(0),
            LineId::Column(c) => self.columns.get(c).copied().unwrap_or(0),
            LineId::MainDiagonal => self.main_diagonal,
            LineId::AntiDiagonal => self.anti_diagonal,
        }
    }

    /// Returns the seat that has claimed `line`, if any.
    pub fn claimed_by(&self, line: LineId) -> Option<Seat> {
        let full = i64::try_from(self.size()).ok()?;
        match self.get(line) {
            v if v == full => Some(Seat::One),
            v if v == -full => Some(Seat::Two),
            _ => None,
        }
    }

    /// Adds one mark by `seat` at `coord` and reports a line it completed.
    ///
    /// Only the lines through `coord` are inspected.
    #[instrument(skip(self))]
    pub fn record(&mut self, coord: Coord, seat: Seat) -> Option<(LineId, Seat)> {
        self.add(coord, seat);
        let completed = LineId::through(coord, self.size())
            .find_map(|line| self.claimed_by(line).map(|owner| (line, owner)));
        if let Some((line, owner)) = completed {
            debug!(%line, %owner, "Line claimed");
        }
        completed
    }

    fn add(&mut self, coord: Coord, seat: Seat) {
        let size = self.size();
        for line in LineId::through(coord, size) {
            if let Some(slot) = self.slot_mut(line) {
                *slot += seat.weight();
            }
        }
    }

    fn slot_mut(&mut self, line: LineId) -> Option<&mut i64> {
        match line {
            LineId::Row(r) => self.rows.get_mut(r),
            LineId::Column(c) => self.columns.get_mut(c),
            LineId::MainDiagonal => Some(&mut self.main_diagonal),
            LineId::AntiDiagonal => Some(&mut self.anti_diagonal),
        }
    }
}
