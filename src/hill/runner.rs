//! Hill Climbing execution engine.
//!
//! # Algorithm
//!
//! 1. `best := start`
//! 2. At each of `max_iterations` iterations:
//!    a. Generate the neighbors of `best`
//!    b. Select the neighbor with minimal cost (first one wins ties)
//!    c. Move there only if it is strictly better than `best`
//! 3. Return `best`

use tracing::instrument;

use super::config::HillConfig;
use crate::error::{Result, SearchError};
use crate::point::Point;
use crate::problem::{fitness, select_best, Neighborhood, Objective};

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillResult {
    /// Best point found.
    pub best: Point,
    /// Cost of the best point.
    pub best_cost: f64,
    /// Total iterations executed (always the configured budget).
    pub iterations: usize,
    /// Number of iterations that moved to a better neighbor.
    pub improvements: usize,
    /// Iteration of the last move, `None` if the start was never left.
    pub last_improvement: Option<usize>,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Hill Climbing runner.
pub struct HillRunner;

impl HillRunner {
    /// Executes Hill Climbing from `start`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyNeighborhood`] if the neighborhood of the
    ///   current point is empty.
    /// - [`SearchError::NonFiniteFitness`] if the objective returns NaN or
    ///   an infinity for the start or any neighbor.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill::{HillConfig, HillRunner};
    /// use u_localsearch::{AxisSteps, Point};
    ///
    /// let f = |p: &Point| (p[0] - 1.0).powi(2) + p[1] * p[1];
    /// let config = HillConfig::default().with_max_iterations(20);
    /// let result = HillRunner::run(&f, &AxisSteps::new(0.5), Point::from([0.0, 0.0]), &config)?;
    /// assert_eq!(result.best, Point::from([1.0, 0.0]));
    /// # Ok::<(), u_localsearch::SearchError>(())
    /// ```
    #[instrument(skip_all, fields(max_iterations = config.max_iterations))]
    pub fn run<O, N>(
        objective: &O,
        neighborhood: &N,
        start: Point,
        config: &HillConfig,
    ) -> Result<HillResult>
    where
        O: Objective + ?Sized,
        N: Neighborhood + ?Sized,
    {
        let mut best_cost = fitness(objective, &start)?;
        let mut best = start;
        let mut improvements = 0;
        let mut last_improvement = None;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let neighbors = neighborhood.neighbors(&best);
            let Some((index, cost)) = select_best(objective, &neighbors)? else {
                return Err(SearchError::EmptyNeighborhood { iteration });
            };

            if cost < best_cost {
                best = neighbors.into_iter().nth(index).unwrap_or(best);
                best_cost = cost;
                improvements += 1;
                last_improvement = Some(iteration);
                tracing::trace!(iteration, best_cost, "moved to better neighbor");
            }

            cost_history.push(best_cost);
        }

        tracing::debug!(
            best_cost,
            improvements,
            last_improvement = ?last_improvement,
            "hill climbing finished"
        );

        Ok(HillResult {
            best,
            best_cost,
            iterations: config.max_iterations,
            improvements,
            last_improvement,
            cost_history,
        })
    }
}

/// Runs Hill Climbing for `max_iterations` and returns the best point.
///
/// Shorthand for [`HillRunner::run`] with a default config.
pub fn climb<O, N>(f: &O, start: Point, neighbors_of: &N, max_iterations: usize) -> Result<Point>
where
    O: Objective + ?Sized,
    N: Neighborhood + ?Sized,
{
    let config = HillConfig::default().with_max_iterations(max_iterations);
    HillRunner::run(f, neighbors_of, start, &config).map(|r| r.best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::AxisSteps;

    fn sphere(p: &Point) -> f64 {
        p[0] * p[0] + p[1] * p[1]
    }

    fn shifted_bowl(p: &Point) -> f64 {
        (p[0] - 3.0).powi(2) + (p[1] + 2.0).powi(2)
    }

    #[test]
    fn test_hill_sphere_reaches_origin() {
        let start = Point::from([10.0, 10.0]);
        let result = HillRunner::run(
            &sphere,
            &AxisSteps::new(1.0),
            start,
            &HillConfig::default().with_max_iterations(50),
        )
        .unwrap();

        assert!(
            result.best.distance(&Point::from([0.0, 0.0])) <= 1.0,
            "expected a point within one step of the origin, got {}",
            result.best
        );
        assert!(result.best_cost <= 200.0);
        assert_eq!(result.best_cost, 0.0);
    }

    #[test]
    fn test_hill_shifted_bowl() {
        let best = climb(&shifted_bowl, Point::from([0.0, 0.0]), &AxisSteps::new(0.5), 100).unwrap();
        assert!(
            best.distance(&Point::from([3.0, -2.0])) <= 0.5,
            "expected a point near (3, -2), got {best}"
        );
    }

    #[test]
    fn test_hill_runs_full_budget_after_convergence() {
        let result = HillRunner::run(
            &sphere,
            &AxisSteps::new(1.0),
            Point::from([2.0, 0.0]),
            &HillConfig::default().with_max_iterations(30),
        )
        .unwrap();

        assert_eq!(result.iterations, 30);
        assert_eq!(result.cost_history.len(), 30);
        assert_eq!(result.improvements, 2);
        assert_eq!(result.last_improvement, Some(1));
    }

    #[test]
    fn test_hill_zero_iterations_returns_start() {
        let start = Point::from([4.25, -7.5]);
        let best = climb(&sphere, start.clone(), &AxisSteps::default(), 0).unwrap();
        assert_eq!(best, start);
    }

    #[test]
    fn test_hill_empty_neighborhood_is_an_error() {
        let nothing = |_: &Point| Vec::<Point>::new();
        let err = climb(&sphere, Point::from([1.0, 1.0]), &nothing, 5).unwrap_err();
        assert_eq!(err, SearchError::EmptyNeighborhood { iteration: 0 });
    }

    #[test]
    fn test_hill_tie_goes_to_first_neighbor() {
        // Both +x and -x neighbors improve equally; the first listed wins.
        let f = |p: &Point| -(p[0].abs());
        let best = climb(&f, Point::from([0.0]), &AxisSteps::new(1.0), 1).unwrap();
        assert_eq!(best, Point::from([1.0]));
    }

    #[test]
    fn test_hill_non_finite_start() {
        let f = |p: &Point| p[0].ln();
        let err = climb(&f, Point::from([-1.0]), &AxisSteps::new(1.0), 3).unwrap_err();
        assert!(matches!(err, SearchError::NonFiniteFitness { .. }));
    }

    #[test]
    fn test_hill_non_finite_neighbor() {
        let f = |p: &Point| if p[0] < 0.0 { f64::NAN } else { p[0] };
        let err = climb(&f, Point::from([0.0]), &AxisSteps::new(1.0), 3).unwrap_err();
        assert!(matches!(err, SearchError::NonFiniteFitness { .. }));
    }

    #[test]
    fn test_hill_cost_history_non_increasing() {
        let result = HillRunner::run(
            &shifted_bowl,
            &AxisSteps::new(0.25),
            Point::from([-4.0, 6.0]),
            &HillConfig::default().with_max_iterations(200),
        )
        .unwrap();

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }
}
