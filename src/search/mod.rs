//! Time-bounded adversarial game-tree search.
//!
//! ## Overview
//!
//! - **Minimax** and **alpha-beta** over any [`Board`](crate::rules::Board)
//! - **Iterative deepening** that keeps the last fully completed depth
//! - **Cooperative cancellation**: every frame polls a [`TimeBudget`] and
//!   unwinds with [`Timeout`] once the remaining time drops below the
//!   configured threshold
//! - **Pluggable evaluation** through [`Evaluator`](crate::eval::Evaluator)
//!
//! ## Usage
//!
//! ```rust
//! use rust_gametree::games::isolation::{CustomScore, IsolationBoard};
//! use rust_gametree::rules::Board;
//! use rust_gametree::search::{Algorithm, Deadline, SearchConfig, Searcher};
//!
//! let board = IsolationBoard::new(7, 7);
//! let config = SearchConfig::default()
//!     .with_algorithm(Algorithm::AlphaBeta)
//!     .with_max_depth(3);
//! let mut searcher = Searcher::configure(config, CustomScore::default()).unwrap();
//!
//! let legal = board.legal_moves();
//! let mv = searcher.select_move(&board, &legal, &Deadline::after_millis(150));
//! assert!(legal.contains(&mv));
//! ```

pub mod config;
pub mod stats;
pub mod timer;

mod alphabeta;
mod driver;
mod minimax;
mod searcher;

use serde::{Deserialize, Serialize};

use crate::core::Move;

pub use config::{Algorithm, SearchConfig};
pub use searcher::Searcher;
pub use stats::SearchStats;
pub use timer::{Deadline, TimeBudget, Timeout};

/// Outcome of one completed search: the score and the move achieving it.
///
/// `score` is `f64::INFINITY` / `f64::NEG_INFINITY` for a forced win / loss
/// from the searching side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    #[must_use]
    pub const fn new(score: f64, best_move: Move) -> Self {
        Self { score, best_move }
    }

    /// Result of a position searched without choosing a move.
    #[must_use]
    pub const fn leaf(score: f64) -> Self {
        Self::new(score, Move::NONE)
    }
}
