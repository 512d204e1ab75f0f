//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; they can also be tested
//! on their own.

/// A property of the engine state that every accepted move preserves.
pub trait Invariant<S> {
    /// Checks the property against `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Checks `I` against `state`, returning its violation if it fails.
    pub fn check<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self::new(I::description()))
    }
}

/// Several invariants checked as one postcondition.
pub trait InvariantSet<S> {
    /// Checks every member, reporting all failures in member order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            InvariantViolation::check::<S, A>(state),
            InvariantViolation::check::<S, B>(state),
            InvariantViolation::check::<S, C>(state),
        ]
        .into_iter()
        .flatten()
        .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod counters_consistent;
pub mod history_consistent;
pub mod status_consistent;

pub use counters_consistent::CountersConsistentInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    CountersConsistentInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Players, Seat, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new(3, Players::default()).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let (engine, _) =
            GameEngine::replay(4, Players::default(), &[(0, 0), (3, 3), (1, 2), (2, 1)]).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut engine = GameEngine::new(3, Players::default()).unwrap();
        engine.play(1, 1).unwrap();

        // Mark a cell behind the engine's back
        engine
            .board
            .place(crate::Coord::new(0, 0), Seat::Two)
            .unwrap();
        assert_eq!(engine.current_cell(0, 0), Square::Occupied(Seat::Two));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        let reported: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(
            reported,
            vec![
                <CountersConsistentInvariant as Invariant<GameEngine>>::description(),
                <HistoryConsistentInvariant as Invariant<GameEngine>>::description(),
            ]
        );
    }

    #[test]
    fn test_single_invariant_check() {
        let mut engine = GameEngine::new(5, Players::default()).unwrap();
        assert_eq!(
            InvariantViolation::check::<_, StatusConsistentInvariant>(&engine),
            None
        );

        engine.turn = Seat::Two;
        let description = <StatusConsistentInvariant as Invariant<GameEngine>>::description();
        assert_eq!(
            InvariantViolation::check::<_, StatusConsistentInvariant>(&engine),
            Some(InvariantViolation::new(description))
        );
    }
}
