//! Tabu Search configuration.

use crate::error::{Result, SearchError};

/// Configuration parameters for Tabu Search.
///
/// The defaults reproduce the classic unbounded, exact-match variant:
/// every accepted point stays tabu for the rest of the run.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tenure(64)
///     .with_equality_tolerance(1e-9);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tenure, Some(64));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run. The loop never exits early.
    pub max_iterations: usize,
    /// How many of the most recent points stay tabu. `None` keeps the
    /// whole history.
    pub tenure: Option<usize>,
    /// Coordinate tolerance for the visited test. `None` uses exact
    /// equality.
    pub equality_tolerance: Option<f64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tenure: None,
            equality_tolerance: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Bounds the history to the `tenure` most recent points.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = Some(tenure);
        self
    }

    /// Treats points within `tolerance` on every axis as the same point.
    pub fn with_equality_tolerance(mut self, tolerance: f64) -> Self {
        self.equality_tolerance = Some(tolerance);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tenure == Some(0) {
            return Err(SearchError::InvalidConfig(
                "tabu tenure must be at least 1".into(),
            ));
        }
        if let Some(t) = self.equality_tolerance {
            if !t.is_finite() || t < 0.0 {
                return Err(SearchError::InvalidConfig(format!(
                    "equality tolerance must be finite and non-negative, got {t}"
                )));
            }
        }
        Ok(())
    }
}
