//! Turn clock and the cooperative cancellation signal.
//!
//! Every search frame asks the [`TimeBudget`] how many milliseconds are left
//! before doing any work. Below the configured threshold the frame returns
//! `Err(Timeout)`, and `?` carries it out through every active frame.

use std::time::{Duration, Instant};

/// Raised when the remaining turn time drops below the threshold.
///
/// A control signal, not a user-facing error: the driver catches it and
/// answers with the best move from the last completed depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("search time budget exhausted")]
pub struct Timeout;

/// Source of "milliseconds left in this turn".
///
/// Queried at every recursive entry, so implementations should be cheap.
/// Closures returning `f64` milliseconds implement it directly.
pub trait TimeBudget {
    /// Milliseconds remaining. May go negative once the turn is over.
    fn time_left_ms(&self) -> f64;
}

impl<F> TimeBudget for F
where
    F: Fn() -> f64,
{
    fn time_left_ms(&self) -> f64 {
        self()
    }
}

/// Wall-clock turn deadline.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// Deadline `limit` from now.
    #[must_use]
    pub fn after(limit: Duration) -> Self {
        Self {
            end: Instant::now() + limit,
        }
    }

    /// Deadline `ms` milliseconds from now.
    #[must_use]
    pub fn after_millis(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }
}

impl TimeBudget for Deadline {
    fn time_left_ms(&self) -> f64 {
        let now = Instant::now();
        if now >= self.end {
            -(now.duration_since(self.end).as_secs_f64() * 1000.0)
        } else {
            self.end.duration_since(now).as_secs_f64() * 1000.0
        }
    }
}

/// Frame-entry check: `Err(Timeout)` once fewer than `threshold_ms` remain.
#[inline]
pub(crate) fn check_time(time: &dyn TimeBudget, threshold_ms: f64) -> Result<(), Timeout> {
    if time.time_left_ms() < threshold_ms {
        Err(Timeout)
    } else {
        Ok(())
    }
}
