//! Counter consistency invariant: incremental tallies match a full rescan.

use super::Invariant;
use crate::GameEngine;
use crate::counters::LineCounters;

/// Invariant: every line counter equals the net of marks on that line.
pub struct CountersConsistentInvariant;

impl Invariant<GameEngine> for CountersConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        LineCounters::from_board(engine.board()) == *engine.counters()
    }

    fn description() -> &'static str {
        "Line counters match the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Players, Seat};

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new(3, Players::default()).unwrap();
        for (row, col) in [(0, 0), (0, 2), (1, 1), (2, 0)] {
            engine.play(row, col).unwrap();
            assert!(CountersConsistentInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_detects_untracked_mark() {
        let mut engine = GameEngine::new(3, Players::default()).unwrap();
        engine.board.place(Coord::new(2, 2), Seat::One).unwrap();
        assert!(!CountersConsistentInvariant::holds(&engine));
    }
}
