//! Invariants of a running game.
//!
//! Invariants are logical properties that must hold after every move.
//! The engine asserts them in debug builds; tests check them directly.

use super::{Board, Cell, Game, rules};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: Replaying the history on the initial board gives the current board.
///
/// Every move lands on a cell that was empty, so marks are never overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed: Board = game.initial_board().clone();
        for mov in game.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Cell::Occupied(mov.mark));
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Invariant: Marks in the history alternate, starting with the seeded next mark.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = game.initial_board().next_mark();
        for mov in game.history() {
            if mov.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }
        // A finished game keeps the winner's (or last) mark to move.
        match game.history().last() {
            Some(last) if game.is_over() => game.to_move() == last.mark,
            _ => game.to_move() == expected,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting from the first mover"
    }
}

/// Invariant: The stored state matches a fresh evaluation of the board.
pub struct ConsistentOutcomeInvariant;

impl Invariant<Game> for ConsistentOutcomeInvariant {
    fn holds(game: &Game) -> bool {
        game.state() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Game state matches the board"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ConsistentOutcomeInvariant,
);

/// Checks every game invariant.
pub fn check(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    TicTacToeInvariants::check_all(game)
}
