//! Tabu Search (TS).
//!
//! A trajectory search that remembers every point it has committed to and
//! refuses to step onto any of them again. When every neighbor of the
//! latest point is already remembered, the search backtracks through its
//! history until it finds a point with an unvisited neighbor. Unlike
//! hill climbing it always moves, even uphill, which lets it walk out of
//! local minima.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod history;
mod runner;

pub use config::TabuConfig;
pub use runner::{tabu, TabuResult, TabuRunner};
