//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine, the contracts and the tests share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameState};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A winning line takes priority over a full board, so a full board
/// that also holds three in a row is a win, never a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameState {
    if let Some(mark) = check_winner(board) {
        GameState::won_by(mark)
    } else if is_full(board) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}
