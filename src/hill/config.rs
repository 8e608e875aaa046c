//! Hill Climbing configuration.

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::HillConfig;
///
/// let config = HillConfig::default().with_max_iterations(1000);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Number of iterations to run. The loop never exits early.
    pub max_iterations: usize,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}

impl HillConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
