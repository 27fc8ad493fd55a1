//! The search context shared by minimax, alpha-beta and the driver.

use crate::core::PlayerId;
use crate::error::ConfigError;
use crate::eval::{Evaluator, ImprovedScore};
use crate::rules::Board;

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::timer::{check_time, TimeBudget, Timeout};

/// Time-bounded minimax / alpha-beta searcher.
///
/// Generic over the board type. Owns its configuration, evaluator and
/// statistics; holds no per-search state, so one searcher can be reused
/// turn after turn.
pub struct Searcher<B: Board> {
    /// Search configuration.
    pub(super) config: SearchConfig,

    /// Scores positions at cutoff nodes.
    pub(super) evaluator: Box<dyn Evaluator<B>>,

    /// Search statistics.
    pub(super) stats: SearchStats,

    /// Set when some frame stopped at the depth limit with moves left,
    /// i.e. a deeper search could see more of the tree.
    pub(super) horizon_reached: bool,
}

impl<B: Board> Searcher<B> {
    /// Create a searcher with the given evaluator, validating `config`.
    pub fn configure<E>(config: SearchConfig, evaluator: E) -> Result<Self, ConfigError>
    where
        E: Evaluator<B> + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            evaluator: Box::new(evaluator),
            stats: SearchStats::default(),
            horizon_reached: false,
        })
    }

    /// Create a searcher scoring positions with [`ImprovedScore`].
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::configure(config, ImprovedScore)
    }

    /// Get search statistics from the last `select_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Frame entry: time check first, then node accounting.
    #[inline]
    pub(super) fn enter(&mut self, time: &dyn TimeBudget) -> Result<(), Timeout> {
        check_time(time, self.config.timeout_threshold_ms)?;
        self.stats.nodes_visited += 1;
        Ok(())
    }

    #[inline]
    pub(super) fn evaluate(&mut self, board: &B, perspective: PlayerId) -> f64 {
        self.stats.leaf_evaluations += 1;
        self.evaluator.score(board, perspective)
    }
}

/// The player whose view anchors every leaf score of a search.
///
/// The top-level caller owns the search: the side to move when the root is
/// a maximizing layer, the waiting side otherwise.
#[inline]
pub(super) fn perspective_of<B: Board>(board: &B, maximizing: bool) -> PlayerId {
    if maximizing {
        board.active_player()
    } else {
        board.inactive_player()
    }
}

/// Starting value of a layer's running best.
#[inline]
pub(super) fn worst_score(maximizing: bool) -> f64 {
    if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Strict improvement, so ties keep the first-seen move.
#[inline]
pub(super) fn improves(maximizing: bool, candidate: f64, best: f64) -> bool {
    if maximizing {
        candidate > best
    } else {
        candidate < best
    }
}
