//! Error types.

/// Errors reported when a search configuration is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1 (got {0})")]
    NonPositiveDepth(u32),

    #[error("max depth must be at least 1 when set (got {0})")]
    NonPositiveMaxDepth(u32),

    #[error("timeout threshold must be a finite, non-negative number of milliseconds (got {0})")]
    InvalidTimeoutThreshold(f64),

    #[error("forced outcome threshold must be positive (got {0})")]
    InvalidForcedOutcomeThreshold(f64),

    #[error("unknown search algorithm {0:?} (expected \"minimax\" or \"alphabeta\")")]
    UnknownAlgorithm(String),
}
