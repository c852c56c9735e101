//! First-class invariants for tic-tac-toe.
//!
//! Invariants are properties every reachable [`GameState`] satisfies. The
//! store checks them after each accepted transition in debug builds; tests
//! check them directly.

use crate::GameState;

pub mod balanced_marks;
pub mod single_winner;
pub mod turn_order;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_order::TurnOrderInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    TurnOrderInvariant,
    SingleWinnerInvariant,
);

/// Checks [`GameInvariants`] on `state`.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Intent, Player, Position, Square, replay};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(check_state(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let (state, _) = replay([
            Intent::Select(Position::TopLeft),
            Intent::Select(Position::Center),
            Intent::Select(Position::TopRight),
        ]);
        assert!(check_state(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Two O marks with X to move breaks balance and turn order.
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::O);
        squares[1] = Square::Occupied(Player::O);
        let state = GameState::from_parts(Board::from_squares(squares), Player::X);

        let violations = check_state(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            BalancedMarksInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BalancedMarksInvariant, TurnOrderInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
