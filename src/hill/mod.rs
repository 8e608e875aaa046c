//! Hill Climbing.
//!
//! The simplest neighborhood search: from the current point, look at
//! every neighbor and move to the best one if it is strictly better.
//! The search spends its whole iteration budget even after it has
//! settled in a local minimum, where it simply stays.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::{climb, HillResult, HillRunner};
