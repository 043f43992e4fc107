//! Move selection for the computer opponent.

use super::{Board, Mark, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty label shown when the computer moves.
///
/// Only a label: every level plays the same random moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
}

/// Something that can pick a move for a mark.
pub trait Strategy {
    /// Chooses an empty position for `mark`, or `None` on a full board.
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position>;

    /// Difficulty label for this strategy.
    fn difficulty(&self) -> Difficulty;
}

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    /// Random strategy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible random strategy.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    #[instrument(skip(self, board), fields(board = %board.encode()))]
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position> {
        let choice = board.random_empty_position(&mut self.rng);
        debug!(?choice, "Random strategy chose");
        choice
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_label() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Easy));
        assert!(Difficulty::from_str("hard").is_err());
    }

    #[test]
    fn test_never_picks_occupied() {
        let board: Board = "XO_OX_XO_".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(1);
        for _ in 0..100 {
            let pos = strategy.choose(&board, Mark::O).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(42);
        let seen: HashSet<Position> = (0..500)
            .filter_map(|_| strategy.choose(&board, Mark::X))
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(9);
        let mut b = RandomStrategy::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.choose(&board, Mark::X), b.choose(&board, Mark::X));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(3);
        assert_eq!(strategy.choose(&board, Mark::O), None);
    }
}
