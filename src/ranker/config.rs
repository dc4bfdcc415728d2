//! Search configuration.

use crate::error::{ResistorError, Result};
use crate::{DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_PARALLEL_BRANCHES, MAX_COMPONENTS_LIMIT};

/// Relative deviation accepted as an exact match when tolerance is zero.
pub const EXACT_MATCH_EPSILON: f64 = 1e-9;

/// Configuration for a circuit search.
///
/// # Examples
///
/// ```
/// use resistor_finder::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_tolerance_percent(1.0)
///     .with_max_results(10)
///     .with_prioritize_fewer_components(true)
///     .with_max_components(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum deviation from the target, in percent of the target.
    ///
    /// Zero or negative demands an exact match (within [`EXACT_MATCH_EPSILON`]).
    pub tolerance_percent: f64,

    /// Maximum number of circuits returned.
    pub max_results: usize,

    /// Rank by component count first, deviation second. When false,
    /// deviation comes first.
    pub prioritize_fewer_components: bool,

    /// Maximum resistors per circuit, at most [`MAX_COMPONENTS_LIMIT`].
    pub max_components: usize,

    /// Maximum branches of any parallel group. Below 2 disables parallel
    /// groups entirely.
    pub max_parallel_branches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance_percent: 5.0,
            max_results: 5,
            prioritize_fewer_components: false,
            max_components: DEFAULT_MAX_COMPONENTS,
            max_parallel_branches: DEFAULT_MAX_PARALLEL_BRANCHES,
        }
    }
}

impl SearchConfig {
    pub fn with_tolerance_percent(mut self, tolerance_percent: f64) -> Self {
        self.tolerance_percent = tolerance_percent;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_prioritize_fewer_components(mut self, prioritize: bool) -> Self {
        self.prioritize_fewer_components = prioritize;
        self
    }

    pub fn with_max_components(mut self, max_components: usize) -> Self {
        self.max_components = max_components;
        self
    }

    pub fn with_max_parallel_branches(mut self, max_parallel_branches: usize) -> Self {
        self.max_parallel_branches = max_parallel_branches;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance_percent.is_nan() {
            return Err(ResistorError::InvalidTolerance {
                value: self.tolerance_percent,
            });
        }
        if self.max_results == 0 {
            return Err(ResistorError::InvalidMaxResults);
        }
        if self.max_components == 0 || self.max_components > MAX_COMPONENTS_LIMIT {
            return Err(ResistorError::invalid_max_components(self.max_components));
        }
        Ok(())
    }

    /// Largest absolute deviation, in ohms, accepted for `target`.
    ///
    /// Never below the exact-match floor, so widening the tolerance never
    /// rejects a circuit a narrower one accepts.
    pub fn allowed_deviation(&self, target: f64) -> f64 {
        let floor = target * EXACT_MATCH_EPSILON;
        if self.tolerance_percent > 0.0 {
            (target * self.tolerance_percent / 100.0).max(floor)
        } else {
            floor
        }
    }
}
