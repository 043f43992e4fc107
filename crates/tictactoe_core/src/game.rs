//! The game engine: board, turn and outcome.

use super::contracts::LegalMove;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{Board, Cell, GameState, Mark, Move, MoveError, Position, SeedError, rules};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board exclusively. Moves go through [`Game::apply_move`], which
/// leaves the game untouched when it rejects a move. Once the state is
/// terminal every further move is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) initial: Board,
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game from a nine-character seed such as `"X_O______"`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the seed is not nine characters of
    /// `X`, `O` or `_`.
    #[instrument]
    pub fn from_seed(seed: &str) -> Result<Self, SeedError> {
        let board: Board = seed.parse()?;
        Ok(Self::from_board(board))
    }

    /// Creates a game from an optional seed; `None` gives an empty board.
    #[instrument]
    pub fn initialize(seed: Option<&str>) -> Result<Self, SeedError> {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Ok(Self::new()),
        }
    }

    /// Creates a game from an existing board.
    ///
    /// The next mark follows the majority rule and the board is evaluated
    /// at once, so a board that already holds a line starts finished.
    #[instrument(skip(board), fields(seed = %board.encode()))]
    pub fn from_board(board: Board) -> Self {
        let to_move = board.next_mark();
        let state = rules::evaluate(&board);
        info!(%to_move, %state, "Game initialized");
        Self {
            initial: board.clone(),
            board,
            to_move,
            state,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns the mark expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the winning mark once the game is won.
    pub fn winner(&self) -> Option<Mark> {
        self.state.winner()
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Moves applied since the game was created.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `mark` at 0-based `row` and `col`.
    ///
    /// On success returns the state after the move; the turn passes to the
    /// other mark only if the game is still in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already finished
    /// - [`MoveError::OutOfRange`] if `row` or `col` is not 0-2
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    /// - [`MoveError::NotYourTurn`] if `mark` is not [`Game::to_move`]
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<GameState, MoveError> {
        let position = LegalMove::check(row, col, mark, self).inspect_err(|error| {
            debug!(%error, "Move rejected");
        })?;

        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));
        self.state = rules::evaluate(&self.board);
        if !self.state.is_terminal() {
            self.to_move = mark.opponent();
        }

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );

        if self.state.is_terminal() {
            info!(state = %self.state, "Game over");
        } else {
            debug!(%position, next = %self.to_move, "Move applied");
        }
        Ok(self.state)
    }

    /// Places `mark` at an already resolved position.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<GameState, MoveError> {
        self.apply_move(position.row(), position.col(), mark)
    }

    /// Re-evaluates the outcome of the current board.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> GameState {
        rules::evaluate(&self.board)
    }

    /// Picks an empty cell uniformly at random.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip(self, rng))]
    pub fn random_valid_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let choice = self.board.random_empty_position(rng);
        debug!(?choice, "Random move chosen");
        choice
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
