//! Nine-character board encoding used to seed a game.
//!
//! Cells are listed row-major (`index = row * 3 + col`), `X` and `O` for
//! marks and `_` for an empty cell. `"X_O______"` has X top-left and O
//! top-right.

use super::{Board, Cell, Mark, Position};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Placeholder character for an empty cell.
pub const EMPTY_SYMBOL: char = '_';

/// A seed string that cannot describe a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SeedError {
    /// Not exactly nine characters.
    #[display("Board seed must be exactly 9 characters, got {len}")]
    WrongLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// A character other than `X`, `O` or `_`.
    #[display("Unrecognized symbol {symbol:?} at position {index} of board seed")]
    UnrecognizedSymbol {
        /// 0-based character index.
        index: usize,
        /// The offending character.
        symbol: char,
    },
}

#[instrument]
fn parse_symbol(index: usize, symbol: char) -> Result<Cell, SeedError> {
    match symbol {
        EMPTY_SYMBOL => Ok(Cell::Empty),
        'X' => Ok(Cell::Occupied(Mark::X)),
        'O' => Ok(Cell::Occupied(Mark::O)),
        _ => Err(SeedError::UnrecognizedSymbol { index, symbol }),
    }
}

impl FromStr for Board {
    type Err = SeedError;

    #[instrument]
    fn from_str(seed: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = seed.chars().collect();
        if symbols.len() != 9 {
            return Err(SeedError::WrongLength { len: symbols.len() });
        }

        let mut board = Board::new();
        for (pos, (index, symbol)) in Position::ALL.iter().zip(symbols.into_iter().enumerate()) {
            board.set(*pos, parse_symbol(index, symbol)?);
        }
        debug!(filled = board.filled(), "Parsed board seed");
        Ok(board)
    }
}

impl Board {
    /// Encodes the board in seed form.
    pub fn encode(&self) -> String {
        self.cells()
            .iter()
            .map(|cell| match cell {
                Cell::Empty => EMPTY_SYMBOL,
                Cell::Occupied(mark) => mark.as_char(),
            })
            .collect()
    }

    /// Mark expected to move next on this board.
    ///
    /// O moves when X holds more cells, otherwise X moves.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_seed() {
        let board: Board = "_________".parse().unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.next_mark(), Mark::X);
    }

    #[test]
    fn test_parse_row_major() {
        let board: Board = "X_O___O_X".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopRight), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::BottomLeft), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::BottomRight), Cell::Occupied(Mark::X));
        assert_eq!(board.encode(), "X_O___O_X");
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(SeedError::WrongLength { len: 2 })
        );
        assert_eq!(
            "__________".parse::<Board>(),
            Err(SeedError::WrongLength { len: 10 })
        );
    }

    #[test]
    fn test_unrecognized_symbol() {
        assert_eq!(
            "XO_x_____".parse::<Board>(),
            Err(SeedError::UnrecognizedSymbol {
                index: 3,
                symbol: 'x'
            })
        );
        assert!(matches!(
            "XO_ _____".parse::<Board>(),
            Err(SeedError::UnrecognizedSymbol { index: 3, .. })
        ));
    }

    #[test]
    fn test_next_mark_majority_rule() {
        let even: Board = "XOXOXOXO_".parse().unwrap();
        assert_eq!(even.next_mark(), Mark::X);

        let x_ahead: Board = "X________".parse().unwrap();
        assert_eq!(x_ahead.next_mark(), Mark::O);

        let o_ahead: Board = "OO_______".parse().unwrap();
        assert_eq!(o_ahead.next_mark(), Mark::X);
    }
}
