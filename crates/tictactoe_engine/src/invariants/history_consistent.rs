//! History consistency invariant: every recorded move is on the board.

use super::Invariant;
use crate::{GameEngine, Square};

/// Invariant: history length equals the number of occupied squares, and
/// each recorded move's cell holds that move's seat.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        engine.history().len() == board.occupied()
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.coord) == Some(Square::Occupied(m.seat)))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
