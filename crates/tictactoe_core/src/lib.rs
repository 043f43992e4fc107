//! Tic-tac-toe game engine.
//!
//! The engine owns the board, whose turn it is and the outcome. It performs
//! no I/O: a shell feeds it coordinates and renders the snapshot it exposes.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`GameState`]
//! - **Positions**: [`Position`] names the nine cells
//! - **Rules**: pure win/draw evaluation in [`rules`]
//! - **Contracts**: move preconditions in [`contracts`]
//! - **Engine**: [`Game`] applies moves and tracks the turn
//! - **Strategy**: [`RandomStrategy`] picks the computer's moves
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameState, Mark};
//!
//! let mut game = Game::new();
//! game.apply_move(0, 0, Mark::X).unwrap();
//! game.apply_move(0, 1, Mark::O).unwrap();
//! assert_eq!(game.to_move(), Mark::X);
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod seed;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use seed::{SeedError, EMPTY_SYMBOL};
pub use strategy::{Difficulty, RandomStrategy, Strategy};
pub use types::{Board, Cell, GameState, Mark};
