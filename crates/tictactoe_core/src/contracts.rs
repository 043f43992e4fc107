//! Precondition checks for moves.
//!
//! Each check is a named rule over the game and the proposed move.
//! [`LegalMove`] composes them in the order the engine reports errors.

use super::{Game, MoveError, Mark, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a terminal game.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        let state = game.state();
        if state.is_terminal() {
            Err(MoveError::GameOver(state))
        } else {
            Ok(())
        }
    }
}

/// Precondition: Row and column must lie on the board.
pub struct InBounds;

impl InBounds {
    /// Resolves 0-based coordinates to a position.
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::from_coords(row, col).ok_or(MoveError::OutOfRange { row, col })
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Precondition: It must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::NotYourTurn`] for the wrong mark.
    #[instrument(skip(game))]
    pub fn check(mark: Mark, game: &Game) -> Result<(), MoveError> {
        let expected = game.to_move();
        if mark == expected {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn {
                expected,
                got: mark,
            })
        }
    }
}

/// Composite precondition: game running, cell on the board and empty, right mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(game))]
    pub fn check(row: usize, col: usize, mark: Mark, game: &Game) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let position = InBounds::check(row, col)?;
        CellIsEmpty::check(position, game)?;
        PlayersTurn::check(mark, game)?;
        Ok(position)
    }
}
