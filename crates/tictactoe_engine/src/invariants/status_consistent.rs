//! Status consistency invariant: the phase agrees with turn and history.

use super::Invariant;
use crate::{GameEngine, GameStatus};

/// Invariant: an in-progress game awaits the seat holding the turn, and a
/// won game was won by the seat that made the last move.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.status() {
            GameStatus::AwaitingMove(seat) => seat == engine.current_turn(),
            GameStatus::Won(seat) => engine.history().last().map(|m| m.seat) == Some(seat),
            GameStatus::Draw => engine.board().is_full(),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the turn and the last move"
    }
}
