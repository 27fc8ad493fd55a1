//! Depth-limited minimax.

use crate::core::PlayerId;
use crate::rules::Board;

use super::searcher::{improves, perspective_of, worst_score, Searcher};
use super::timer::{TimeBudget, Timeout};
use super::SearchResult;

impl<B: Board> Searcher<B> {
    /// Minimax search to `depth` plies.
    ///
    /// Returns the best score and the move achieving it; ties go to the
    /// first move in enumeration order. With no legal moves the result is
    /// the position's own score and `Move::NONE`.
    ///
    /// Every frame checks `time` before doing any work and returns
    /// `Err(Timeout)` once the remaining time drops below the threshold.
    pub fn minimax(
        &mut self,
        board: &B,
        depth: u32,
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

        let mut best = SearchResult::new(worst_score(maximizing), moves[0]);
        for &mv in &moves {
            let child = board.forecast_move(mv);
            let score = self.minimax_value(&child, depth - 1, !maximizing, perspective, time)?;
            if improves(maximizing, score, best.score) {
                best = SearchResult::new(score, mv);
            }
        }

        Ok(best)
    }

    fn minimax_value(
        &mut self,
        board: &B,
        depth: u32,
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
            let score = self.minimax_value(&child, depth - 1, !maximizing, perspective, time)?;
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        Ok(best)
    }

    /// Record that a depth-limited frame stopped with moves left. Only the
    /// first such frame of a search generates moves for the check.
    #[inline]
    pub(super) fn note_horizon(&mut self, board: &B) {
        if !self.horizon_reached && !board.legal_moves().is_empty() {
            self.horizon_reached = true;
        }
    }
}
