//! Evaluation strategy trait.

use crate::core::PlayerId;
use crate::rules::Board;

/// Scores a position from one player's point of view.
///
/// Implementations must return `f64::INFINITY` when `player` has already
/// won and `f64::NEG_INFINITY` when `player` has already lost (see
/// [`Board::is_winner`] / [`Board::is_loser`]). Any finite value is allowed
/// otherwise; the search treats it as a black box.
///
/// Any `Fn(&B, PlayerId) -> f64` closure is an evaluator:
///
/// ```
/// use rust_gametree::core::PlayerId;
/// use rust_gametree::eval::Evaluator;
/// use rust_gametree::games::isolation::IsolationBoard;
///
/// let flat = |_: &IsolationBoard, _: PlayerId| 1.5;
/// assert_eq!(flat.score(&IsolationBoard::new(7, 7), PlayerId::FIRST), 1.5);
/// ```
pub trait Evaluator<B: Board> {
    /// Heuristic value of `board` to `player`.
    fn score(&self, board: &B, player: PlayerId) -> f64;
}

impl<B, F> Evaluator<B> for F
where
    B: Board,
    F: Fn(&B, PlayerId) -> f64,
{
    fn score(&self, board: &B, player: PlayerId) -> f64 {
        self(board, player)
    }
}

/// Terminal score of `board` for `player`, if the game is already decided.
///
/// Shared prelude of the built-in heuristics.
#[must_use]
pub fn terminal_score<B: Board>(board: &B, player: PlayerId) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}
