//! Evaluation strategies consumed by the search engine.
//!
//! The search calls into an [`Evaluator`] at cutoff nodes and never computes
//! scores itself. Game-specific heuristics live next to their game (see
//! `games::isolation::CustomScore`).

pub mod evaluator;
pub mod heuristics;

pub use evaluator::{terminal_score, Evaluator};
pub use heuristics::{ImprovedScore, NullScore, OpenMoveScore};
