//! Move-choosing agents.
//!
//! An [`Agent`] is anything that answers "which move?" for a position under
//! a turn clock. The [`Searcher`] is the real one; [`RandomAgent`] is a
//! seeded baseline opponent.

use crate::core::{GameRng, Move};
use crate::rules::Board;
use crate::search::{Searcher, TimeBudget};

/// Chooses moves for the side to move.
pub trait Agent<B: Board> {
    /// Pick one of `legal_moves`, or `Move::NONE` if there are none.
    fn get_move(&mut self, board: &B, legal_moves: &[Move], time: &dyn TimeBudget) -> Move;
}

impl<B: Board> Agent<B> for Searcher<B> {
    fn get_move(&mut self, board: &B, legal_moves: &[Move], time: &dyn TimeBudget) -> Move {
        self.select_move(board, legal_moves, time)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent. Same seed, same choices.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<B: Board> Agent<B> for RandomAgent {
    fn get_move(&mut self, _board: &B, legal_moves: &[Move], _time: &dyn TimeBudget) -> Move {
        self.rng.choose(legal_moves).copied().unwrap_or(Move::NONE)
    }
}
