//! Neighborhood-based local search over continuous domains.
//!
//! Provides small, deterministic engines for locating a local minimum of a
//! scalar objective, plus the pieces needed to compare them:
//!
//! - **Hill Climbing**: move to the best strictly-improving neighbor,
//!   stay put otherwise. See [`hill`].
//! - **Tabu Search (TS)**: always move to the best unvisited neighbor,
//!   backtracking through the visited history when stuck. See [`tabu`].
//! - **Simulated Annealing (SA)**: random neighbor, probabilistic
//!   acceptance under a cooling schedule. See [`sa`].
//! - **Benchmarks**: Holder table, Eggholder, McCormick and sphere
//!   landscapes. See [`benchmark`].
//! - **Restarts**: independent runs from sampled starting points,
//!   optionally in parallel. See [`restart`].
//!
//! # Architecture
//!
//! Engines know nothing about the landscape. The caller supplies an
//! [`Objective`], a [`Neighborhood`] and a starting [`Point`]; engines
//! return the best point seen. All randomness lives in explicitly
//! constructed generators ([`UniformSampler`], [`sa::SaConfig::seed`]).
//!
//! ```
//! use u_localsearch::{climb, tabu, AxisSteps, Point};
//!
//! let f = |p: &Point| (p[0] - 3.0).powi(2) + (p[1] + 2.0).powi(2);
//! let step = AxisSteps::new(0.5);
//!
//! let hill = climb(&f, Point::from([0.0, 0.0]), &step, 100)?;
//! let walked = tabu(&f, Point::from([0.0, 0.0]), &step, 100)?;
//! assert_eq!(hill, Point::from([3.0, -2.0]));
//! assert_eq!(walked, Point::from([3.0, -2.0]));
//! # Ok::<(), u_localsearch::SearchError>(())
//! ```

pub mod benchmark;
pub mod error;
pub mod hill;
pub mod point;
pub mod problem;
pub mod restart;
pub mod sa;
pub mod sampler;
pub mod strategy;
pub mod tabu;

pub use benchmark::Benchmark;
pub use error::SearchError;
pub use hill::climb;
pub use point::Point;
pub use problem::{AxisSteps, Neighborhood, Objective};
pub use sampler::UniformSampler;
pub use strategy::{Outcome, Strategy};
pub use tabu::tabu;
