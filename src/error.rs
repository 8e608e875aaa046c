//! Error types shared by all search engines.

use thiserror::Error;

use crate::point::Point;

/// Errors that abort a single search run.
///
/// Every engine owns its state exclusively, so an error never leaves
/// anything behind that another run could observe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The neighbor generator returned no candidates where a selection
    /// was required.
    #[error("neighbor generator returned no candidates at iteration {iteration}")]
    EmptyNeighborhood {
        /// Zero-based iteration in which the empty list was produced.
        iteration: usize,
    },

    /// The objective produced NaN or an infinity.
    #[error("objective returned non-finite value {value} at point ({point})")]
    NonFiniteFitness {
        /// The point that was evaluated.
        point: Point,
        /// The offending value.
        value: f64,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sampling box has an empty or non-finite extent.
    #[error("invalid bounds: [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower edge.
        lower: f64,
        /// Upper edge.
        upper: f64,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
