//! Terminal shell for playing tic-tac-toe against the computer.
//!
//! The engine lives in [`tictactoe_core`]; this crate reads the player's
//! moves, renders the board and drives turns through a [`Console`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameConfig, ScriptedConsole, build_session};
//! use tictactoe_core::GameState;
//!
//! // One move left for X, who wins along the top row.
//! let console = ScriptedConsole::new(["1 3"]);
//! let config = GameConfig::default().with_overrides(&tictactoe::Cli {
//!     cells: Some("XX_OO____".to_string()),
//! });
//! let mut session = build_session(&config, console).unwrap();
//! assert_eq!(session.run().unwrap(), GameState::XWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod render;
mod shell;

pub use cli::Cli;
pub use config::{CONFIG_ENV, ConfigError, GameConfig, RNG_SEED_ENV};
pub use console::{Console, ScriptedConsole, StdConsole, read_line_lossy};
pub use render::render_board;
pub use shell::{InputError, PROMPT, Session, ShellError, parse_coordinates};

use tictactoe_core::{Difficulty, Game, RandomStrategy, SeedError};
use tracing::instrument;

/// Builds a session from config: seeds the board and picks the strategy.
///
/// # Errors
///
/// Returns [`SeedError`] when the configured cells do not describe a board.
#[instrument(skip(config, console))]
pub fn build_session<C: Console>(
    config: &GameConfig,
    console: C,
) -> Result<Session<C, RandomStrategy>, SeedError> {
    let game = Game::initialize(config.cells().as_deref())?;
    let strategy = match config.difficulty() {
        Difficulty::Easy => match config.rng_seed() {
            Some(seed) => RandomStrategy::seeded(*seed),
            None => RandomStrategy::from_entropy(),
        },
    };
    Ok(Session::new(game, console, strategy))
}
