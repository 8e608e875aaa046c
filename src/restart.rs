//! Independent restarts from sampled starting points.
//!
//! Every start is drawn from the sampler up front, then each run owns its
//! own history and best point. With the `parallel` feature the runs are
//! spread over the rayon thread pool; results are the same either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

use crate::error::{Result, SearchError};
use crate::point::Point;
use crate::problem::{Neighborhood, Objective};
use crate::sampler::UniformSampler;
use crate::strategy::{Outcome, Strategy};

/// All runs of a multi-start search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartResult {
    /// One outcome per restart, in sampling order.
    pub outcomes: Vec<Outcome>,
    /// Index of the lowest-cost outcome (first one on ties).
    pub best_index: usize,
}

impl MultiStartResult {
    /// The lowest-cost outcome.
    pub fn best(&self) -> &Outcome {
        &self.outcomes[self.best_index]
    }
}

/// Runs `strategy` from `restarts` sampled starting points.
///
/// A seeded annealing strategy gets seed `seed + i` for restart `i`, so
/// the restarts do not replay the same random walk.
///
/// # Errors
///
/// [`SearchError::InvalidConfig`] if `restarts` is zero, or the first
/// error any run returned.
#[instrument(skip_all, fields(strategy = strategy.name(), restarts = restarts))]
pub fn multi_start<O, N>(
    strategy: &Strategy,
    objective: &O,
    neighborhood: &N,
    sampler: &mut UniformSampler,
    restarts: usize,
) -> Result<MultiStartResult>
where
    O: Objective + Sync + ?Sized,
    N: Neighborhood + Sync + ?Sized,
{
    if restarts == 0 {
        return Err(SearchError::InvalidConfig(
            "at least one restart is required".into(),
        ));
    }

    let starts: Vec<Point> = (0..restarts).map(|_| sampler.sample()).collect();
    let run = |(i, start): (usize, Point)| {
        strategy_for_restart(strategy, i).run(objective, neighborhood, start)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Outcome>> = starts.into_par_iter().enumerate().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Outcome>> = starts.into_iter().enumerate().map(run).collect();

    let outcomes = results.into_iter().collect::<Result<Vec<_>>>()?;
    let best_index = outcomes
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.best_cost.total_cmp(&b.1.best_cost))
        .map(|(i, _)| i)
        .unwrap_or(0);

    tracing::info!(
        best_cost = outcomes[best_index].best_cost,
        best_index,
        "multi-start finished"
    );

    Ok(MultiStartResult {
        outcomes,
        best_index,
    })
}

fn strategy_for_restart(strategy: &Strategy, index: usize) -> Strategy {
    match strategy {
        Strategy::Annealing(config) => match config.seed {
            Some(seed) => strategy.reseeded(seed.wrapping_add(index as u64)),
            None => strategy.clone(),
        },
        _ => strategy.clone(),
    }
}
