//! Move selection: fixed-depth search or iterative deepening under a clock.
//!
//! Iterative deepening walks a small state machine:
//!
//! ```text
//! Running(d) --ok--> Completed(d, result) --> Running(d + 1)
//!     |                   |
//!     |                   +-- forced outcome / depth cap / tree exhausted --> return result
//!     +--timeout--> Aborted(last completed result) --> return it (or first legal move)
//! ```
//!
//! A depth that times out is discarded, never resumed.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::core::Move;
use crate::rules::Board;

use super::config::Algorithm;
use super::searcher::Searcher;
use super::timer::{TimeBudget, Timeout};
use super::SearchResult;

/// Iterative deepening states.
#[derive(Clone, Debug, PartialEq)]
enum DeepeningState {
    /// Searching at this depth.
    Running(u32),
    /// This depth finished normally.
    Completed { depth: u32, result: SearchResult },
    /// The clock ran out; holds the last completed result, if any.
    Aborted { last_completed: Option<SearchResult> },
}

impl<B: Board> Searcher<B> {
    /// Choose a move for the side to move in `board`.
    ///
    /// `legal_moves` are the moves available at the root; when empty the
    /// answer is `Move::NONE` and no search runs. `time` is queried at every
    /// search frame. A timeout never escapes this method: the result of the
    /// last completed depth is returned instead, or the first legal move if
    /// none completed.
    pub fn select_move(&mut self, board: &B, legal_moves: &[Move], time: &dyn TimeBudget) -> Move {
        self.stats.reset();

        let Some(&first_legal) = legal_moves.first() else {
            return Move::NONE;
        };

        let start = Instant::now();
        trace!(
            "selecting move: {} {} search, {} legal moves",
            if self.config.iterative { "iterative" } else { "fixed-depth" },
            self.config.algorithm,
            legal_moves.len()
        );

        let chosen = if self.config.iterative {
            self.deepen(board, time)
        } else {
            self.fixed_depth(board, time)
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "search finished: depth {}, {} nodes in {} us ({:.0} nodes/s)",
            self.stats.depth_completed,
            self.stats.nodes_visited,
            self.stats.time_us,
            self.stats.nodes_per_second()
        );

        match chosen {
            Some(mv) if !mv.is_none() => mv,
            Some(_) => {
                warn!("board reports no moves at the root, falling back to first legal move {first_legal}");
                first_legal
            }
            None => {
                warn!("no search depth completed, falling back to first legal move {first_legal}");
                first_legal
            }
        }
    }

    /// One search at the configured algorithm and `depth`, on behalf of
    /// the side to move.
    fn search_at(&mut self, board: &B, depth: u32, time: &dyn TimeBudget) -> Result<SearchResult, Timeout> {
        self.horizon_reached = false;
        match self.config.algorithm {
            Algorithm::Minimax => self.minimax(board, depth, true, time),
            Algorithm::AlphaBeta => self.alphabeta_full(board, depth, true, time),
        }
    }

    fn fixed_depth(&mut self, board: &B, time: &dyn TimeBudget) -> Option<Move> {
        let depth = self.config.search_depth;
        match self.search_at(board, depth, time) {
            Ok(result) => {
                self.stats.depth_completed = depth;
                Some(result.best_move)
            }
            Err(Timeout) => {
                self.stats.timed_out = true;
                None
            }
        }
    }

    fn deepen(&mut self, board: &B, time: &dyn TimeBudget) -> Option<Move> {
        let mut last_completed: Option<SearchResult> = None;
        let mut state = DeepeningState::Running(1);

        loop {
            state = match state {
                DeepeningState::Running(depth) => match self.search_at(board, depth, time) {
                    Ok(result) => DeepeningState::Completed { depth, result },
                    Err(Timeout) => DeepeningState::Aborted {
                        last_completed: last_completed.take(),
                    },
                },
                DeepeningState::Completed { depth, result } => {
                    self.stats.depth_completed = depth;
                    last_completed = Some(result);
                    debug!(
                        "depth {depth} complete: best {} score {} ({} nodes)",
                        result.best_move, result.score, self.stats.nodes_visited
                    );

                    if self.config.algorithm == Algorithm::AlphaBeta
                        && self.config.is_forced_outcome(result.score)
                    {
                        debug!("forced outcome at depth {depth}, stop deepening");
                        return Some(result.best_move);
                    }
                    if self.config.max_depth.is_some_and(|cap| depth >= cap) {
                        return Some(result.best_move);
                    }
                    if !self.horizon_reached {
                        debug!("game tree exhausted at depth {depth}");
                        return Some(result.best_move);
                    }

                    DeepeningState::Running(depth + 1)
                }
                DeepeningState::Aborted { last_completed } => {
                    self.stats.timed_out = true;
                    debug!(
                        "timed out during depth {}, keeping depth {} result",
                        self.stats.depth_completed + 1,
                        self.stats.depth_completed
                    );
                    return last_completed.map(|result| result.best_move);
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::OpenMoveScore;
    use crate::games::isolation::IsolationBoard;
    use crate::search::SearchConfig;

    fn no_clock() -> f64 {
        f64::INFINITY
    }

    #[test]
    fn test_empty_legal_moves_skips_search() {
        let board = IsolationBoard::new(3, 3)
            .forecast_move(Move::new(1, 1))
            .forecast_move(Move::new(0, 0));
        let mut search = Searcher::new(SearchConfig::default()).unwrap();

        assert_eq!(search.select_move(&board, &[], &no_clock), Move::NONE);
        assert_eq!(search.stats().nodes_visited, 0);
    }

    #[test]
    fn test_stuck_board_with_caller_moves_falls_back_without_timeout() {
        // First player stuck in the centre, but the caller still offers a move.
        let board = IsolationBoard::new(3, 3)
            .forecast_move(Move::new(1, 1))
            .forecast_move(Move::new(0, 0));
        let legal = [Move::new(0, 1)];
        let mut search = Searcher::configure(SearchConfig::default(), OpenMoveScore).unwrap();

        assert_eq!(search.select_move(&board, &legal, &no_clock), legal[0]);
        assert!(!search.stats().timed_out);
        assert_eq!(search.stats().depth_completed, 1);
    }

    #[test]
    fn test_fixed_depth_timeout_falls_back_to_first_move() {
        let board = IsolationBoard::new(3, 3);
        let legal = board.legal_moves();
        let mut search =
            Searcher::configure(SearchConfig::default().fixed_depth(), OpenMoveScore).unwrap();
        let expired = || 0.0;

        assert_eq!(search.select_move(&board, &legal, &expired), legal[0]);
        assert!(search.stats().timed_out);
        assert_eq!(search.stats().depth_completed, 0);
    }

    #[test]
    fn test_deepening_stops_when_tree_is_exhausted() {
        // 3x3 games last only a handful of plies, so deepening with an
        // unlimited clock must terminate on its own.
        let board = IsolationBoard::new(3, 3).forecast_move(Move::new(0, 0));
        let legal = board.legal_moves();
        let mut search = Searcher::configure(SearchConfig::default(), OpenMoveScore).unwrap();

        let mv = search.select_move(&board, &legal, &no_clock);
        assert!(legal.contains(&mv));
        assert!(!search.stats().timed_out);
        assert!(search.stats().depth_completed <= 8);
    }

    #[test]
    fn test_max_depth_caps_deepening() {
        let board = IsolationBoard::new(7, 7)
            .forecast_move(Move::new(3, 3))
            .forecast_move(Move::new(0, 0));
        let legal = board.legal_moves();
        let config = SearchConfig::default()
            .with_algorithm(Algorithm::AlphaBeta)
            .with_max_depth(2);
        let mut search = Searcher::configure(config, OpenMoveScore).unwrap();

        search.select_move(&board, &legal, &no_clock);
        assert_eq!(search.stats().depth_completed, 2);
    }
}
