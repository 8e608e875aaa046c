//! SA execution loop.

use rand::Rng;
use tracing::instrument;

use super::config::SaConfig;
use crate::error::{Result, SearchError};
use crate::point::Point;
use crate::problem::{fitness, Neighborhood, Objective};
use crate::sampler::create_rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best point found.
    pub best: Point,

    /// Cost of the best point.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that lowered the current cost.
    pub improving_moves: usize,

    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `start`.
    ///
    /// Each iteration draws one neighbor uniformly from the neighborhood
    /// of the current point. The run ends after `max_iterations` or once
    /// the temperature has cooled to `min_temperature`, whichever is first.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfig`] if `config` fails validation.
    /// - [`SearchError::EmptyNeighborhood`] if a neighborhood is empty.
    /// - [`SearchError::NonFiniteFitness`] if the objective returns NaN or
    ///   an infinity.
    #[instrument(skip_all, fields(max_iterations = config.max_iterations, seed = ?config.seed))]
    pub fn run<O, N>(
        objective: &O,
        neighborhood: &N,
        start: Point,
        config: &SaConfig,
    ) -> Result<SaResult>
    where
        O: Objective + ?Sized,
        N: Neighborhood + ?Sized,
    {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let mut current_cost = fitness(objective, &start)?;
        let mut current = start;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for step in 0..config.max_iterations {
            if temperature <= config.min_temperature {
                break;
            }

            let mut neighbors = neighborhood.neighbors(&current);
            if neighbors.is_empty() {
                return Err(SearchError::EmptyNeighborhood { iteration: step });
            }
            let candidate = neighbors.swap_remove(rng.random_range(0..neighbors.len()));
            let candidate_cost = fitness(objective, &candidate)?;
            let delta = candidate_cost - current_cost;

            let probability = config.acceptance.probability(delta, temperature);
            if rng.random::<f64>() < probability {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_cost = candidate_cost;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::trace!(iteration = step, best_cost, temperature, "new best");
                }
            }

            iterations += 1;
            cost_history.push(best_cost);
            temperature = config.cooling.next(temperature, step, config);
        }

        tracing::debug!(
            best_cost,
            iterations,
            accepted_moves,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::AxisSteps;
    use crate::sa::{Acceptance, CoolingSchedule};

    fn shifted_bowl(p: &Point) -> f64 {
        (p[0] - 3.0).powi(2) + (p[1] + 2.0).powi(2)
    }

    fn annealing_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(1e-6)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9995 })
            .with_max_iterations(20_000)
            .with_seed(42)
    }

    #[test]
    fn test_sa_shifted_bowl() {
        let result = SaRunner::run(
            &shifted_bowl,
            &AxisSteps::new(0.5),
            Point::from([0.0, 0.0]),
            &annealing_config(),
        )
        .unwrap();

        assert!(
            result.best.distance(&Point::from([3.0, -2.0])) <= 0.5,
            "expected a point near (3, -2), got {}",
            result.best
        );
    }

    #[test]
    fn test_sa_barker_shifted_bowl() {
        let config = annealing_config().with_acceptance(Acceptance::Barker);
        let result = SaRunner::run(
            &shifted_bowl,
            &AxisSteps::new(0.5),
            Point::from([0.0, 0.0]),
            &config,
        )
        .unwrap();

        assert!(result.best_cost <= 0.25, "got cost {}", result.best_cost);
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let run = || {
            SaRunner::run(
                &shifted_bowl,
                &AxisSteps::new(0.5),
                Point::from([-5.0, 5.0]),
                &annealing_config().with_max_iterations(2_000),
            )
            .unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_sa_stops_at_min_temperature() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(0.5)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.5 })
            .with_max_iterations(1_000)
            .with_seed(1);
        let result =
            SaRunner::run(&shifted_bowl, &AxisSteps::new(0.5), Point::from([0.0, 0.0]), &config)
                .unwrap();

        assert_eq!(result.iterations, 1);
        assert!(result.final_temperature <= 0.5);
    }

    #[test]
    fn test_sa_zero_iterations_returns_start() {
        let start = Point::from([1.25, 1.25]);
        let result = SaRunner::run(
            &shifted_bowl,
            &AxisSteps::new(0.5),
            start.clone(),
            &annealing_config().with_max_iterations(0),
        )
        .unwrap();
        assert_eq!(result.best, start);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_sa_empty_neighborhood() {
        let nothing = |_: &Point| Vec::<Point>::new();
        let err = SaRunner::run(&shifted_bowl, &nothing, Point::from([0.0, 0.0]), &annealing_config())
            .unwrap_err();
        assert_eq!(err, SearchError::EmptyNeighborhood { iteration: 0 });
    }

    #[test]
    fn test_sa_invalid_config() {
        let config = annealing_config().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        let err = SaRunner::run(&shifted_bowl, &AxisSteps::new(0.5), Point::from([0.0, 0.0]), &config)
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_sa_accepts_uphill_at_high_temperature() {
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9999 })
            .with_max_iterations(1_000)
            .with_seed(42);
        let result =
            SaRunner::run(&shifted_bowl, &AxisSteps::new(0.5), Point::from([0.0, 0.0]), &config)
                .unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.9,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let result = SaRunner::run(
            &shifted_bowl,
            &AxisSteps::new(0.5),
            Point::from([4.0, 4.0]),
            &annealing_config().with_max_iterations(3_000),
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
