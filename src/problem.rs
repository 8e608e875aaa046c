//! Collaborator traits shared by every engine.
//!
//! An engine needs two things from its caller besides a starting point:
//! an [`Objective`] to minimize and a [`Neighborhood`] that proposes nearby
//! candidates. Both are implemented for plain closures, so most callers
//! never name the traits:
//!
//! ```
//! use u_localsearch::{climb, Point};
//!
//! let sphere = |p: &Point| p[0] * p[0] + p[1] * p[1];
//! let axis = |p: &Point| vec![p.shifted(0, 1.0), p.shifted(0, -1.0)];
//! let best = climb(&sphere, Point::from([3.0, 0.0]), &axis, 10).unwrap();
//! assert_eq!(best, Point::from([0.0, 0.0]));
//! ```

use crate::error::{Result, SearchError};
use crate::point::Point;

/// A scalar function to minimize. Lower is better.
///
/// Implementations must be pure and defined for every point the paired
/// [`Neighborhood`] can produce; no bounds checking is performed by the
/// engines.
pub trait Objective {
    /// Evaluates the fitness of `point`.
    fn value(&self, point: &Point) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&Point) -> f64,
{
    fn value(&self, point: &Point) -> f64 {
        self(point)
    }
}

/// Proposes the finite set of points adjacent to a given point.
///
/// The list order matters: engines break fitness ties in favor of the
/// first candidate.
pub trait Neighborhood {
    /// Returns the neighbors of `point`.
    fn neighbors(&self, point: &Point) -> Vec<Point>;
}

impl<F> Neighborhood for F
where
    F: Fn(&Point) -> Vec<Point>,
{
    fn neighbors(&self, point: &Point) -> Vec<Point> {
        self(point)
    }
}

/// Perturbs each coordinate independently by `+step` and `-step`.
///
/// Produces `2 * dim` neighbors ordered `+x0, -x0, +x1, -x1, ...`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSteps {
    /// Perturbation applied to one coordinate at a time.
    pub step: f64,
}

impl AxisSteps {
    /// Creates a generator with the given step size.
    pub fn new(step: f64) -> Self {
        Self { step }
    }
}

impl Default for AxisSteps {
    fn default() -> Self {
        Self { step: 1.0 / 128.0 }
    }
}

impl Neighborhood for AxisSteps {
    fn neighbors(&self, point: &Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(2 * point.dim());
        for axis in 0..point.dim() {
            out.push(point.shifted(axis, self.step));
            out.push(point.shifted(axis, -self.step));
        }
        out
    }
}

/// Evaluates `point`, rejecting NaN and infinities.
pub(crate) fn fitness<O>(objective: &O, point: &Point) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let value = objective.value(point);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SearchError::NonFiniteFitness {
            point: point.clone(),
            value,
        })
    }
}

/// Index and fitness of the minimal candidate.
///
/// A later candidate replaces the current pick only when strictly better,
/// so the first minimal element wins. Returns `None` for an empty slice.
pub(crate) fn select_best<O>(objective: &O, candidates: &[Point]) -> Result<Option<(usize, f64)>>
where
    O: Objective + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let cost = fitness(objective, candidate)?;
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((i, cost));
        }
    }
    Ok(best)
}
