//! Text rendering of the board.

use tictactoe_core::{Board, Cell};

const FRAME: &str = "---------";

/// Renders the board inside a dashed frame, one `| a b c |` line per row.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FRAME);
    out.push('\n');
    for row in board.rows() {
        out.push_str("| ");
        for cell in row {
            out.push(match cell {
                Cell::Empty => ' ',
                Cell::Occupied(mark) => mark.as_char(),
            });
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(FRAME);
    out
}
