//! Game-agnostic mobility heuristics.
//!
//! Each heuristic reports `+inf` / `-inf` for decided positions and a
//! mobility-based value otherwise.

use crate::core::PlayerId;
use crate::rules::Board;

use super::evaluator::{terminal_score, Evaluator};

/// Zero for every undecided position.
///
/// Turns the search into pure win/loss detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScore;

impl<B: Board> Evaluator<B> for NullScore {
    fn score(&self, board: &B, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or(0.0)
    }
}

/// Number of legal moves available to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveScore;

impl<B: Board> Evaluator<B> for OpenMoveScore {
    fn score(&self, board: &B, player: PlayerId) -> f64 {
        terminal_score(board, player)
            .unwrap_or_else(|| board.legal_moves_for(player).len() as f64)
    }
}

/// Own legal moves minus the opponent's legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedScore;

impl<B: Board> Evaluator<B> for ImprovedScore {
    fn score(&self, board: &B, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| {
            let own = board.legal_moves_for(player).len() as f64;
            let opp = board.legal_moves_for(board.opponent(player)).len() as f64;
            own - opp
        })
    }
}
