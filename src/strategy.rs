//! A uniform front over the three engines.
//!
//! Drivers that compare strategies on the same landscape pick a
//! [`Strategy`] and call [`Strategy::run`]; the engine-specific result is
//! flattened into an [`Outcome`].

use std::fmt;

use crate::error::Result;
use crate::hill::{HillConfig, HillRunner};
use crate::point::Point;
use crate::problem::{Neighborhood, Objective};
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};

/// A configured search engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    HillClimbing(HillConfig),
    Tabu(TabuConfig),
    Annealing(SaConfig),
}

/// What one run produced, independent of the engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Name of the strategy that ran.
    pub strategy: String,
    /// Where the run started.
    pub start: Point,
    /// Best point found.
    pub best: Point,
    /// Cost of the best point.
    pub best_cost: f64,
    /// Iterations actually executed.
    pub iterations: usize,
}

impl Strategy {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(_) => "hill",
            Strategy::Tabu(_) => "tabu",
            Strategy::Annealing(_) => "annealing",
        }
    }

    /// Returns a copy with the seed replaced, for engines that use one.
    pub fn reseeded(&self, seed: u64) -> Self {
        match self {
            Strategy::Annealing(config) => Strategy::Annealing(config.clone().with_seed(seed)),
            other => other.clone(),
        }
    }

    /// Runs the engine from `start`.
    pub fn run<O, N>(&self, objective: &O, neighborhood: &N, start: Point) -> Result<Outcome>
    where
        O: Objective + ?Sized,
        N: Neighborhood + ?Sized,
    {
        let origin = start.clone();
        let (best, best_cost, iterations) = match self {
            Strategy::HillClimbing(config) => {
                let r = HillRunner::run(objective, neighborhood, start, config)?;
                (r.best, r.best_cost, r.iterations)
            }
            Strategy::Tabu(config) => {
                let r = TabuRunner::run(objective, neighborhood, start, config)?;
                (r.best, r.best_cost, r.iterations)
            }
            Strategy::Annealing(config) => {
                let r = SaRunner::run(objective, neighborhood, start, config)?;
                (r.best, r.best_cost, r.iterations)
            }
        };

        Ok(Outcome {
            strategy: self.name().to_string(),
            start: origin,
            best,
            best_cost,
            iterations,
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
