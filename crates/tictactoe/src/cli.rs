//! Command-line interface for tictactoe.
//!
//! The optional board seed is the only argument. Session settings that are
//! not part of the game itself come from the environment; see
//! [`crate::GameConfig::resolve`].

use clap::Parser;

/// Tic-tac-toe against a random computer opponent
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial board: 9 characters, row by row, using X, O and _ for empty
    #[arg(value_name = "CELLS")]
    pub cells: Option<String>,
}
