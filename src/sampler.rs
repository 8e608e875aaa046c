//! Random starting points.
//!
//! The sampler owns its generator; nothing in this crate keeps a
//! process-wide random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SearchError};
use crate::point::Point;

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Draws points uniformly from an axis-aligned box.
///
/// # Examples
///
/// ```
/// use u_localsearch::UniformSampler;
///
/// let mut sampler = UniformSampler::square(512.0, 2)?.with_seed(7);
/// let p = sampler.sample();
/// assert_eq!(p.dim(), 2);
/// assert!(p.coords().iter().all(|c| (-512.0..512.0).contains(c)));
/// # Ok::<(), u_localsearch::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UniformSampler {
    bounds: Vec<(f64, f64)>,
    rng: StdRng,
}

impl UniformSampler {
    /// Creates a sampler over `bounds`, one `(lower, upper)` pair per axis,
    /// seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidBounds`] if any pair is non-finite, has
    /// `lower >= upper`, or spans a width that overflows `f64`.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        for &(lower, upper) in &bounds {
            let width = upper - lower;
            if !(lower.is_finite() && upper.is_finite() && lower < upper && width.is_finite()) {
                return Err(SearchError::InvalidBounds { lower, upper });
            }
        }
        Ok(Self {
            bounds,
            rng: create_rng(None),
        })
    }

    /// A `[-half_width, half_width]^dim` box.
    pub fn square(half_width: f64, dim: usize) -> Result<Self> {
        Self::new(vec![(-half_width, half_width); dim])
    }

    /// Replaces the generator with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = create_rng(Some(seed));
        self
    }

    /// The sampling box.
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Draws one point.
    pub fn sample(&mut self) -> Point {
        let coords = self
            .bounds
            .iter()
            .map(|&(lower, upper)| self.rng.random_range(lower..upper))
            .collect();
        Point::new(coords)
    }
}
