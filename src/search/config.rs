//! Search configuration parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which tree search the driver runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Plain depth-limited minimax.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::AlphaBeta),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched in fixed-depth mode (must be >= 1).
    pub search_depth: u32,

    /// Iterative deepening (true) or a single fixed-depth search (false).
    pub iterative: bool,

    /// Search procedure.
    pub algorithm: Algorithm,

    /// Abort when fewer than this many milliseconds remain.
    /// Must leave enough time for the search to unwind and return.
    pub timeout_threshold_ms: f64,

    /// Optional cap on iterative deepening (None = deepen until time runs out).
    pub max_depth: Option<u32>,

    /// Alpha-beta deepening stops once a completed depth scores at least
    /// this much in magnitude (None = only proven wins/losses, i.e. +-inf).
    pub forced_outcome_threshold: Option<f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            algorithm: Algorithm::Minimax,
            timeout_threshold_ms: 10.0,
            max_depth: None,
            forced_outcome_threshold: None,
        }
    }
}

impl SearchConfig {
    /// Set the fixed search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the search algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enable iterative deepening.
    pub fn iterative(mut self) -> Self {
        self.iterative = true;
        self
    }

    /// Disable iterative deepening: one search at `search_depth`.
    pub fn fixed_depth(mut self) -> Self {
        self.iterative = false;
        self
    }

    /// Set the timeout threshold in milliseconds.
    pub fn with_timeout_threshold(mut self, ms: f64) -> Self {
        self.timeout_threshold_ms = ms;
        self
    }

    /// Cap iterative deepening at `depth`.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the forced-outcome magnitude that ends alpha-beta deepening.
    pub fn with_forced_outcome_threshold(mut self, threshold: f64) -> Self {
        self.forced_outcome_threshold = Some(threshold);
        self
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::NonPositiveDepth(self.search_depth));
        }
        if let Some(0) = self.max_depth {
            return Err(ConfigError::NonPositiveMaxDepth(0));
        }
        if !self.timeout_threshold_ms.is_finite() || self.timeout_threshold_ms < 0.0 {
            return Err(ConfigError::InvalidTimeoutThreshold(self.timeout_threshold_ms));
        }
        if let Some(threshold) = self.forced_outcome_threshold {
            if threshold.is_nan() || threshold <= 0.0 {
                return Err(ConfigError::InvalidForcedOutcomeThreshold(threshold));
            }
        }
        Ok(())
    }

    /// True if a score this large ends alpha-beta deepening.
    #[must_use]
    pub fn is_forced_outcome(&self, score: f64) -> bool {
        match self.forced_outcome_threshold {
            Some(threshold) => score.abs() >= threshold,
            None => score.is_infinite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.search_depth, 3);
        assert!(config.iterative);
        assert_eq!(config.algorithm, Algorithm::Minimax);
        assert_eq!(config.timeout_threshold_ms, 10.0);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.forced_outcome_threshold, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(5)
            .with_algorithm(Algorithm::AlphaBeta)
            .fixed_depth()
            .with_timeout_threshold(25.0)
            .with_max_depth(9)
            .with_forced_outcome_threshold(200.0);

        assert_eq!(config.search_depth, 5);
        assert_eq!(config.algorithm, Algorithm::AlphaBeta);
        assert!(!config.iterative);
        assert_eq!(config.timeout_threshold_ms, 25.0);
        assert_eq!(config.max_depth, Some(9));
        assert_eq!(config.forced_outcome_threshold, Some(200.0));
        assert!(config.iterative().iterative);
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        assert_eq!(
            SearchConfig::default().with_depth(0).validate(),
            Err(ConfigError::NonPositiveDepth(0))
        );
        assert_eq!(
            SearchConfig::default().with_max_depth(0).validate(),
            Err(ConfigError::NonPositiveMaxDepth(0))
        );
        assert!(matches!(
            SearchConfig::default().with_timeout_threshold(-1.0).validate(),
            Err(ConfigError::InvalidTimeoutThreshold(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_timeout_threshold(f64::NAN).validate(),
            Err(ConfigError::InvalidTimeoutThreshold(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_forced_outcome_threshold(f64::NAN).validate(),
            Err(ConfigError::InvalidForcedOutcomeThreshold(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_forced_outcome_threshold(0.0).validate(),
            Err(ConfigError::InvalidForcedOutcomeThreshold(_))
        ));
        assert!(SearchConfig::default().with_timeout_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn test_forced_outcome_detection() {
        let config = SearchConfig::default();
        assert!(config.is_forced_outcome(f64::INFINITY));
        assert!(config.is_forced_outcome(f64::NEG_INFINITY));
        assert!(!config.is_forced_outcome(1e12));

        let loose = config.with_forced_outcome_threshold(200.0);
        assert!(loose.is_forced_outcome(-250.0));
        assert!(!loose.is_forced_outcome(199.0));
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("minimax".parse::<Algorithm>(), Ok(Algorithm::Minimax));
        assert_eq!("alphabeta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert!("negamax".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::AlphaBeta.to_string(), "alphabeta");
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default()
            .with_algorithm(Algorithm::AlphaBeta)
            .with_max_depth(4);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"alphabeta\""));
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.algorithm, Algorithm::AlphaBeta);
        assert_eq!(deserialized.max_depth, Some(4));
    }
}
