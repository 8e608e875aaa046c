//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. History := `[start]`, best := `start`
//! 2. At each of `max_iterations` iterations:
//!    a. Walk the history from newest to oldest
//!    b. For each remembered point, generate its neighbors and drop the
//!       ones already in the history
//!    c. At the first point with any admissible neighbor, append the best
//!       admissible neighbor to the history and stop walking
//!    d. If the whole history was walked without an admissible neighbor,
//!       the iteration stalls and appends nothing
//!    e. Update best if the appended point is strictly better
//! 3. Return best
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use tracing::instrument;

use super::config::TabuConfig;
use super::history::TabuHistory;
use crate::error::Result;
use crate::point::Point;
use crate::problem::{fitness, select_best, Neighborhood, Objective};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best point found.
    pub best: Point,
    /// Cost of the best point.
    pub best_cost: f64,
    /// Total iterations executed (always the configured budget).
    pub iterations: usize,
    /// Iteration at which the best point was appended, `None` if the
    /// start was never beaten.
    pub best_iteration: Option<usize>,
    /// Iterations in which no admissible neighbor existed anywhere.
    pub stalled_iterations: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// The final tabu list, oldest first.
    pub history: Vec<Point>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from `start`.
    ///
    /// An empty neighbor list is not an error here: it is treated like a
    /// list whose every entry is tabu, and the walk moves on to an older
    /// point.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfig`](crate::SearchError::InvalidConfig)
    ///   if `config` fails validation.
    /// - [`SearchError::NonFiniteFitness`](crate::SearchError::NonFiniteFitness)
    ///   if the objective returns NaN or an infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::tabu::{TabuConfig, TabuRunner};
    /// use u_localsearch::{AxisSteps, Point};
    ///
    /// let f = |p: &Point| p[0] * p[0] + p[1] * p[1];
    /// let config = TabuConfig::default().with_max_iterations(40);
    /// let result = TabuRunner::run(&f, &AxisSteps::new(1.0), Point::from([5.0, -3.0]), &config)?;
    /// assert_eq!(result.best, Point::from([0.0, 0.0]));
    /// assert!(result.history.len() <= 41);
    /// # Ok::<(), u_localsearch::SearchError>(())
    /// ```
    #[instrument(skip_all, fields(max_iterations = config.max_iterations, tenure = ?config.tenure))]
    pub fn run<O, N>(
        objective: &O,
        neighborhood: &N,
        start: Point,
        config: &TabuConfig,
    ) -> Result<TabuResult>
    where
        O: Objective + ?Sized,
        N: Neighborhood + ?Sized,
    {
        config.validate()?;

        let mut best_cost = fitness(objective, &start)?;
        let mut best = start.clone();
        let mut best_iteration = None;
        let mut stalled_iterations = 0;
        let mut history = TabuHistory::new(start, config.tenure, config.equality_tolerance);
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            match next_move(objective, neighborhood, &history)? {
                Some((point, cost)) => {
                    if cost < best_cost {
                        best = point.clone();
                        best_cost = cost;
                        best_iteration = Some(iteration);
                        tracing::trace!(iteration, best_cost, "new best");
                    }
                    history.push(point);
                }
                None => {
                    stalled_iterations += 1;
                    tracing::debug!(iteration, "every remembered point is surrounded by tabu points");
                }
            }

            cost_history.push(best_cost);
        }

        tracing::debug!(
            best_cost,
            best_iteration = ?best_iteration,
            stalled_iterations,
            history_len = history.len(),
            "tabu search finished"
        );

        Ok(TabuResult {
            best,
            best_cost,
            iterations: config.max_iterations,
            best_iteration,
            stalled_iterations,
            cost_history,
            history: history.into_vec(),
        })
    }
}

/// Finds the point to append this iteration, walking the history backward.
fn next_move<O, N>(
    objective: &O,
    neighborhood: &N,
    history: &TabuHistory,
) -> Result<Option<(Point, f64)>>
where
    O: Objective + ?Sized,
    N: Neighborhood + ?Sized,
{
    for anchor in history.iter().rev() {
        let admissible: Vec<Point> = neighborhood
            .neighbors(anchor)
            .into_iter()
            .filter(|p| !history.contains(p))
            .collect();

        if let Some((index, cost)) = select_best(objective, &admissible)? {
            let point = admissible.into_iter().nth(index);
            return Ok(point.map(|p| (p, cost)));
        }
    }
    Ok(None)
}

/// Runs Tabu Search for `max_iterations` with an unbounded, exact-match
/// history and returns the best point.
pub fn tabu<O, N>(f: &O, start: Point, neighbors_of: &N, max_iterations: usize) -> Result<Point>
where
    O: Objective + ?Sized,
    N: Neighborhood + ?Sized,
{
    let config = TabuConfig::default().with_max_iterations(max_iterations);
    TabuRunner::run(f, neighbors_of, start, &config).map(|r| r.best)
}
