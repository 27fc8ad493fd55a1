//! # rust-gametree
//!
//! Time-bounded adversarial game-tree search for two-player,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search only sees the `Board` trait. Legal moves,
//!    move application and turn order belong to the game.
//!
//! 2. **Anytime**: Iterative deepening always has an answer ready; running
//!    out of time returns the best move of the last completed depth.
//!
//! 3. **Explicit Frames**: Depth, bounds and the perspective player are
//!    plain arguments of each recursive call. Nothing is shared between
//!    branches.
//!
//! ## Architecture
//!
//! - **Cooperative Cancellation**: Every search frame polls the turn clock
//!   first and unwinds with `Err(Timeout)` through `?`.
//!
//! - **Persistent Boards**: `forecast_move` returns a new position; the
//!   reference Isolation board shares structure via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Players, moves, RNG
//! - `rules`: `Board` trait implemented by games
//! - `eval`: Evaluation strategies
//! - `search`: Minimax, alpha-beta, iterative deepening, time budget
//! - `agents`: Move-choosing agents
//! - `games`: Reference game implementations (Isolation)
//! - `error`: Configuration errors

pub mod core;
pub mod error;
pub mod rules;
pub mod eval;
pub mod search;
pub mod agents;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, Move, MoveList, PlayerId, PlayerMap};

pub use crate::error::ConfigError;

pub use crate::rules::{Board, GameResult};

pub use crate::eval::{Evaluator, ImprovedScore, NullScore, OpenMoveScore};

pub use crate::search::{
    Algorithm, Deadline, SearchConfig, SearchResult, SearchStats, Searcher, TimeBudget, Timeout,
};

pub use crate::agents::{Agent, RandomAgent};
