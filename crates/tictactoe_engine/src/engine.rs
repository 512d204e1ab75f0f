//! The game-state engine.
//!
//! `GameEngine` owns the board, the line counters, the turn and the move
//! history. Callers validate a move, apply it, and advance the turn while
//! the game is still running:
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Players};
//!
//! let mut engine = GameEngine::new(3, Players::default()).unwrap();
//! let coord = engine.validate_move(1, 1).unwrap();
//! let outcome = engine.apply_move(coord).unwrap();
//! assert_eq!(outcome, Outcome::Continue);
//! engine.advance_turn();
//! assert_eq!(engine.current_turn_name(), "User 2");
//! ```

use crate::action::{MAX_SIZE, MIN_SIZE, Move, MoveError, SizeError};
use crate::counters::LineCounters;
use crate::phases::{GameStatus, Outcome};
use crate::types::{Board, Coord, Player, Players, Seat, Square};
use tracing::{debug, info, instrument, warn};

/// N×N tic-tac-toe engine with incremental win detection.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) players: Players,
    pub(crate) board: Board,
    pub(crate) counters: LineCounters,
    pub(crate) turn: Seat,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// Creates an engine with an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns `SizeError::TooSmall` if `size` is below [`MIN_SIZE`] and
    /// `SizeError::TooLarge` if it is above [`MAX_SIZE`].
    #[instrument(skip(players))]
    pub fn new(size: usize, players: Players) -> Result<Self, SizeError> {
        check_size(size)?;
        Ok(Self {
            players,
            board: Board::new(size),
            counters: LineCounters::new(size),
            turn: Seat::One,
            status: GameStatus::AwaitingMove(Seat::One),
            history: Vec::new(),
        })
    }

    /// Resets the game onto an empty board of the given size.
    ///
    /// Seat one moves first again. The roster is kept.
    ///
    /// # Errors
    ///
    /// Returns a `SizeError` if `size` lies outside
    /// [`MIN_SIZE`]..=[`MAX_SIZE`]; the current game is left untouched in
    /// that case.
    #[instrument(skip(self))]
    pub fn configure(&mut self, size: usize) -> Result<(), SizeError> {
        check_size(size)?;
        self.board = Board::new(size);
        self.counters = LineCounters::new(size);
        self.turn = Seat::One;
        self.status = GameStatus::AwaitingMove(Seat::One);
        self.history.clear();
        info!(size, "Board configured");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// Checks that `(row, col)` is on the board and free.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfRange` if either coordinate is outside `[0, size)`
    /// - `MoveError::CellTaken` if the cell is occupied
    #[instrument(skip(self))]
    pub fn validate_move(&self, row: i64, col: i64) -> Result<Coord, MoveError> {
        let coord = self.board.coord(row, col).ok_or(MoveError::OutOfRange {
            row,
            col,
            size: self.size(),
        })?;
        self.check_free(coord)?;
        Ok(coord)
    }

    /// Marks `coord` for the seat to move and reports the outcome.
    ///
    /// The coordinate is checked again against the current board, so a
    /// stale validation cannot overwrite a cell. Only the lines through
    /// `coord` are inspected for a win. Debug builds additionally check
    /// [`EngineInvariants`](crate::invariants::EngineInvariants) after the
    /// move, which rescans the whole board.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game was won or drawn
    /// - `MoveError::OutOfRange` / `MoveError::CellTaken` as in
    ///   [`GameEngine::validate_move`]
    /// - `MoveError::InvariantViolation` if a postcondition fails
    ///   (debug builds only)
    #[instrument(skip(self), fields(seat = %self.turn))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<Outcome, MoveError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        self.check_free(coord)?;

        let seat = self.turn;
        self.board.place(coord, seat)?;
        self.history.push(Move::new(seat, coord));

        let outcome = match self.counters.record(coord, seat) {
            Some((line, winner)) => {
                info!(%line, %winner, "Line completed");
                Outcome::Won(winner)
            }
            None if self.board.is_full() => {
                info!("Board full, game drawn");
                Outcome::Draw
            }
            None => Outcome::Continue,
        };

        self.status = match outcome {
            Outcome::Won(winner) => GameStatus::Won(winner),
            Outcome::Draw => GameStatus::Draw,
            Outcome::Continue => GameStatus::AwaitingMove(seat),
        };

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{EngineInvariants, InvariantSet};
            EngineInvariants::check_all(self).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
            })?;
        }

        debug!(?outcome, occupied = self.board.occupied(), "Move applied");
        Ok(outcome)
    }

    /// Hands the turn to the other seat.
    ///
    /// Has no effect once the game is over.
    #[instrument(skip(self), fields(from = %self.turn))]
    pub fn advance_turn(&mut self) {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Turn not advanced, game is over");
            return;
        }
        self.turn = self.turn.opponent();
        self.status = GameStatus::AwaitingMove(self.turn);
        debug!(to = %self.turn, "Turn advanced");
    }

    /// Validates, applies and, if the game goes on, advances the turn.
    ///
    /// # Errors
    ///
    /// Any error from [`GameEngine::validate_move`] or
    /// [`GameEngine::apply_move`]; the engine is unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: i64, col: i64) -> Result<Outcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let coord = self.validate_move(row, col)?;
        let outcome = self.apply_move(coord)?;
        if !outcome.is_ended() {
            self.advance_turn();
        }
        Ok(outcome)
    }

    /// Plays `moves` in order on a fresh board, stopping at the first
    /// move that ends the game.
    ///
    /// # Errors
    ///
    /// Fails on an invalid size or the first illegal move.
    #[instrument(skip(players))]
    pub fn replay(
        size: usize,
        players: Players,
        moves: &[(i64, i64)],
    ) -> Result<(Self, Outcome), ReplayError> {
        let mut engine = Self::new(size, players)?;
        let mut outcome = Outcome::Continue;
        for &(row, col) in moves {
            outcome = engine.play(row, col)?;
            if outcome.is_ended() {
                break;
            }
        }
        Ok((engine, outcome))
    }

    fn check_free(&self, coord: Coord) -> Result<(), MoveError> {
        match self.board.get(coord) {
            None => Err(MoveError::out_of_range(coord, self.size())),
            Some(Square::Occupied(_)) => Err(MoveError::CellTaken(coord)),
            Some(Square::Empty) => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameEngine {
    /// Occupant of `(row, col)`; off-board lookups report empty.
    pub fn current_cell(&self, row: i64, col: i64) -> Square {
        self.board
            .coord(row, col)
            .and_then(|coord| self.board.get(coord))
            .unwrap_or(Square::Empty)
    }

    /// Seat whose move is expected.
    pub fn current_turn(&self) -> Seat {
        self.turn
    }

    /// Profile of the seat whose move is expected.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.turn)
    }

    /// Display name of the seat whose move is expected.
    pub fn current_turn_name(&self) -> &str {
        self.current_player().name()
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the line counters.
    pub fn counters(&self) -> &LineCounters {
        &self.counters
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the roster.
    pub fn players(&self) -> &Players {
        &self.players
    }
}

fn check_size(size: usize) -> Result<(), SizeError> {
    if size < MIN_SIZE {
        warn!(size, "Board size rejected");
        return Err(SizeError::TooSmall(size));
    }
    if size > MAX_SIZE {
        warn!(size, max = MAX_SIZE, "Board size rejected");
        return Err(SizeError::TooLarge(size));
    }
    Ok(())
}

/// Error raised while replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ReplayError {
    /// The board size was rejected.
    #[display("{}", _0)]
    Size(SizeError),
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for ReplayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::LineId;

    fn engine(size: usize) -> GameEngine {
        GameEngine::new(size, Players::default()).unwrap()
    }

    #[test]
    fn test_new_engine_awaits_seat_one() {
        let engine = engine(3);
        assert_eq!(engine.current_turn(), Seat::One);
        assert_eq!(engine.status(), GameStatus::AwaitingMove(Seat::One));
        assert_eq!(engine.board().occupied(), 0);
    }

    #[test]
    fn test_size_below_three_rejected() {
        assert_eq!(
            GameEngine::new(2, Players::default()).unwrap_err(),
            SizeError::TooSmall(2)
        );
        let mut engine = engine(3);
        assert_eq!(engine.configure(1), Err(SizeError::TooSmall(1)));
        assert_eq!(engine.size(), 3);
    }

    #[test]
    fn test_size_above_max_rejected() {
        assert_eq!(
            GameEngine::new(MAX_SIZE + 1, Players::default()).unwrap_err(),
            SizeError::TooLarge(MAX_SIZE + 1)
        );
        assert_eq!(
            GameEngine::new(usize::MAX, Players::default()).unwrap_err(),
            SizeError::TooLarge(usize::MAX)
        );

        let mut engine = engine(3);
        engine.play(1, 1).unwrap();
        assert_eq!(engine.configure(usize::MAX), Err(SizeError::TooLarge(usize::MAX)));
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.board().occupied(), 1);
    }

    #[test]
    fn test_largest_board_accepted() {
        let mut engine = engine(MAX_SIZE);
        assert_eq!(engine.board().squares().len(), MAX_SIZE * MAX_SIZE);
        assert_eq!(engine.play(MAX_SIZE as i64 - 1, 0), Ok(Outcome::Continue));
    }

    #[test]
    fn test_configure_resets_everything() {
        let mut engine = engine(3);
        engine.play(0, 0).unwrap();
        engine.play(1, 1).unwrap();
        engine.configure(4).unwrap();

        assert_eq!(engine.size(), 4);
        assert_eq!(engine.current_turn(), Seat::One);
        assert!(engine.history().is_empty());
        assert_eq!(engine.counters(), &LineCounters::new(4));
        assert_eq!(engine.current_cell(0, 0), Square::Empty);
    }

    #[test]
    fn test_validate_out_of_range() {
        let engine = engine(3);
        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
            assert_eq!(
                engine.validate_move(row, col),
                Err(MoveError::OutOfRange { row, col, size: 3 })
            );
        }
    }

    #[test]
    fn test_apply_rechecks_stale_coordinate() {
        let mut engine = engine(3);
        let coord = engine.validate_move(2, 2).unwrap();
        engine.apply_move(coord).unwrap();
        engine.advance_turn();
        assert_eq!(engine.apply_move(coord), Err(MoveError::CellTaken(coord)));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_apply_rejects_off_board_coordinate() {
        let mut engine = engine(3);
        assert!(matches!(
            engine.apply_move(Coord::new(5, 0)),
            Err(MoveError::OutOfRange { row: 5, col: 0, size: 3 })
        ));
    }

    #[test]
    fn test_counters_follow_moves() {
        let mut engine = engine(3);
        engine.play(1, 1).unwrap();
        engine.play(0, 2).unwrap();
        let counters = engine.counters();
        assert_eq!(counters.get(LineId::Row(1)), 1);
        assert_eq!(counters.get(LineId::AntiDiagonal), 1);
        assert_eq!(counters.get(LineId::MainDiagonal), 0);
        assert_eq!(counters.get(LineId::Row(0)), -1);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let (mut engine, outcome) = GameEngine::replay(
            3,
            Players::default(),
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Won(Seat::One));
        assert_eq!(engine.status(), GameStatus::Won(Seat::One));

        let coord = Coord::new(2, 2);
        assert_eq!(engine.apply_move(coord), Err(MoveError::GameOver));
        engine.advance_turn();
        assert_eq!(engine.current_turn(), Seat::One);
    }

    #[test]
    fn test_current_cell_reports_occupant() {
        let mut engine = engine(3);
        engine.play(0, 1).unwrap();
        engine.play(2, 0).unwrap();
        assert_eq!(engine.current_cell(0, 1), Square::Occupied(Seat::One));
        assert_eq!(engine.current_cell(2, 0).id(), 2);
        assert_eq!(engine.current_cell(1, 1).id(), 0);
        assert_eq!(engine.current_cell(-4, 9), Square::Empty);
    }

    #[test]
    fn test_replay_surfaces_illegal_move() {
        let err = GameEngine::replay(3, Players::default(), &[(0, 0), (0, 0)]).unwrap_err();
        assert_eq!(err, ReplayError::Move(MoveError::CellTaken(Coord::new(0, 0))));
    }
}
