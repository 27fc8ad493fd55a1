//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `select_move` call.
///
/// Counters never influence search decisions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search frames entered (root included) that passed the time check.
    pub nodes_visited: u64,

    /// Calls into the evaluator.
    pub leaf_evaluations: u64,

    /// Alpha-beta sibling cutoffs.
    pub cutoffs: u64,

    /// Deepest fully completed search depth (0 = none completed).
    pub depth_completed: u32,

    /// True if the last search was aborted by the time budget.
    pub timed_out: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
