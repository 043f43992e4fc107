//! Human vs. computer game loop over an injected console.

use crate::console::Console;
use crate::render::render_board;
use derive_more::{Display, Error, From};
use tictactoe_core::{Game, GameState, Mark, MoveError, Position, Strategy};
use tracing::{debug, info, instrument, warn};

/// Prompt printed once per human turn.
pub const PROMPT: &str = "Enter the coordinates: ";

/// Why a line typed by the player is not a usable coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not two integers.
    #[display("You should enter numbers!")]
    NotNumbers,
    /// Integers outside 1-3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
    /// Target cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    Occupied,
}

/// Parses a line such as `"2 3"` into the board position it names.
///
/// Coordinates are 1-based, row first.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<Position, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::NotNumbers);
    };
    let row: i64 = row.parse().map_err(|_| InputError::NotNumbers)?;
    let col: i64 = col.parse().map_err(|_| InputError::NotNumbers)?;
    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err(InputError::OutOfRange);
    }
    Position::from_one_based(row as usize, col as usize).ok_or(InputError::OutOfRange)
}

/// Failure that ends a session.
#[derive(Debug, Display, Error, From)]
pub enum ShellError {
    /// Input closed while waiting for the player's move.
    #[display("Input closed before the game finished")]
    InputClosed,
    /// The strategy found no move on a board still in progress.
    #[display("Computer could not find a move")]
    NoMoveAvailable,
    /// The engine rejected a move the shell believed legal.
    #[display("Move rejected: {_0}")]
    #[from]
    Move(MoveError),
    /// Console I/O failed.
    #[display("Console error: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// One game between a human at the console and a computer strategy.
///
/// The human plays the mark that is to move when the session starts;
/// the computer plays the other one.
pub struct Session<C, S> {
    game: Game,
    console: C,
    strategy: S,
    human: Mark,
}

impl<C: Console, S: Strategy> Session<C, S> {
    /// Creates a session; the human takes the game's next mark.
    pub fn new(game: Game, console: C, strategy: S) -> Self {
        let human = game.to_move();
        Self {
            game,
            console,
            strategy,
            human,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The console, e.g. to inspect a scripted transcript.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Plays until the game is over and returns the final state.
    ///
    /// The board is printed at the start and after every move; the
    /// outcome is printed last.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn run(&mut self) -> Result<GameState, ShellError> {
        info!(seed = %self.game.board().encode(), "Session started");
        self.print_board()?;

        while !self.game.is_over() {
            if self.game.to_move() == self.human {
                self.human_turn()?;
            } else {
                self.computer_turn()?;
            }
            self.print_board()?;
        }

        let state = self.game.state();
        self.console.write_line(&state.to_string())?;
        info!(%state, moves = self.game.history().len(), "Session finished");
        Ok(state)
    }

    fn print_board(&mut self) -> Result<(), ShellError> {
        let rendered = render_board(self.game.board());
        self.console.write_line(&rendered)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn human_turn(&mut self) -> Result<(), ShellError> {
        self.console.write(PROMPT)?;
        loop {
            let line = self.console.read_line()?.ok_or(ShellError::InputClosed)?;
            let error = match parse_coordinates(&line) {
                Ok(position) => match self.game.place(position, self.human) {
                    Ok(_) => return Ok(()),
                    Err(MoveError::CellOccupied(_)) => InputError::Occupied,
                    Err(MoveError::OutOfRange { .. }) => InputError::OutOfRange,
                    Err(other) => return Err(other.into()),
                },
                Err(error) => error,
            };
            debug!(%line, %error, "Invalid input");
            self.console.write_line(&error.to_string())?;
        }
    }

    #[instrument(skip(self))]
    fn computer_turn(&mut self) -> Result<(), ShellError> {
        let mark = self.human.opponent();
        self.console.write_line(&format!(
            "Making move level \"{}\"",
            self.strategy.difficulty()
        ))?;
        let Some(position) = self.strategy.choose(self.game.board(), mark) else {
            warn!("Strategy returned no move");
            return Err(ShellError::NoMoveAvailable);
        };
        self.game.place(position, mark)?;
        debug!(%position, "Computer moved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_coordinates("1 1"), Ok(Position::TopLeft));
        assert_eq!(parse_coordinates("  3   2 "), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_parse_not_numbers() {
        assert_eq!(parse_coordinates("one two"), Err(InputError::NotNumbers));
        assert_eq!(parse_coordinates("1"), Err(InputError::NotNumbers));
        assert_eq!(parse_coordinates("1 2 3"), Err(InputError::NotNumbers));
        assert_eq!(parse_coordinates(""), Err(InputError::NotNumbers));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_coordinates("0 1"), Err(InputError::OutOfRange));
        assert_eq!(parse_coordinates("4 1"), Err(InputError::OutOfRange));
        assert_eq!(parse_coordinates("-1 2"), Err(InputError::OutOfRange));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::NotNumbers.to_string(), "You should enter numbers!");
        assert_eq!(
            InputError::Occupied.to_string(),
            "This cell is occupied! Choose another one!"
        );
    }
}
