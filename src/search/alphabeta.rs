//! Minimax with alpha-beta pruning.
//!
//! Same leaf rule, perspective anchoring and time checks as minimax. Bounds
//! travel down as plain arguments; each frame narrows its own copy.

use crate::core::PlayerId;
use crate::rules::Board;

use super::searcher::{improves, perspective_of, worst_score, Searcher};
use super::timer::{TimeBudget, Timeout};
use super::SearchResult;

impl<B: Board> Searcher<B> {
    /// Alpha-beta search with the full `(-inf, +inf)` window.
    pub fn alphabeta_full(
        &mut self,
        board: &B,
        depth: u32,
        maximizing: bool,
        time: &dyn TimeBudget,
    ) -> Result<SearchResult, Timeout> {
        self.alphabeta(board, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing, time)
    }

    /// Alpha-beta search to `depth` plies inside the `(alpha, beta)` window.
    ///
    /// With the full window the score equals the minimax score. The root
    /// frame tracks the selected move; inner frames only return scores.
    /// With no legal moves the result carries `Move::NONE`.
    pub fn alphabeta(
        &mut self,
        board: &B,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
        time: &dyn TimeBudget,
    ) -> Result<SearchResult, Timeout> {
        let perspective = perspective_of(board, maximizing);
        self.enter(time)?;

        if depth == 0 {
            self.note_horizon(board);
            return Ok(SearchResult::leaf(self.evaluate(board, perspective)));
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult::leaf(self.evaluate(board, perspective)));
        }

        let (mut alpha, mut beta) = (alpha, beta);
        let mut best = SearchResult::new(worst_score(maximizing), moves[0]);
        for &mv in &moves {
            let child = board.forecast_move(mv);
            let score =
                self.alphabeta_value(&child, depth - 1, alpha, beta, !maximizing, perspective, time)?;
            if improves(maximizing, score, best.score) {
                best = SearchResult::new(score, mv);
            }

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta_value(
        &mut self,
        board: &B,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        perspective: PlayerId,
        time: &dyn TimeBudget,
    ) -> Result<f64, Timeout> {
        self.enter(time)?;

        if depth == 0 {
            self.note_horizon(board);
            return Ok(self.evaluate(board, perspective));
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(self.evaluate(board, perspective));
        }

        let mut best = worst_score(maximizing);
        for &mv in &moves {
            let child = board.forecast_move(mv);
            let score =
                self.alphabeta_value(&child, depth - 1, alpha, beta, !maximizing, perspective, time)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            // Remaining siblings cannot change the parent's choice.
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}
