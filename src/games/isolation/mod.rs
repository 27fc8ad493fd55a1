//! Knight-move Isolation, the reference game for the search engine.
//!
//! - Two players share a rectangular board (7x7 by default in play)
//! - A player's first move may land on any open cell
//! - After that, each move is a chess knight jump onto an open cell
//! - Every cell a player has stood on stays blocked
//! - A player with no legal move on their turn loses

mod board;
mod heuristic;

pub use board::IsolationBoard;
pub use heuristic::CustomScore;
