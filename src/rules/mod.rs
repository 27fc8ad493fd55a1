//! Board abstraction for game implementations.
//!
//! Games implement `Board` to define:
//! - Legal moves for each player
//! - How a move produces the next position
//! - Turn order
//!
//! The search engine calls into `Board` but never interprets
//! game-specific concepts directly.

pub mod board;

pub use board::{Board, GameResult};
