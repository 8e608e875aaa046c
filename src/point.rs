//! Candidate solutions in a continuous domain.

use std::fmt;
use std::ops::Index;

/// A fixed-dimension vector of real coordinates.
///
/// Points are never mutated once built; moving through the search space
/// always produces a fresh point via [`Point::shifted`].
///
/// Equality is exact coordinate-wise `f64` equality. Tabu search relies on
/// this for its visited-history membership test; see
/// [`TabuConfig::with_equality_tolerance`](crate::tabu::TabuConfig::with_equality_tolerance)
/// for the tolerance-based alternative.
///
/// # Examples
///
/// ```
/// use u_localsearch::Point;
///
/// let p = Point::from([1.0, 2.0]);
/// let q = p.shifted(0, 0.5);
/// assert_eq!(q.coords(), &[1.5, 2.0]);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// The coordinates, in axis order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Returns a copy of this point with `delta` added to coordinate `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.dim()`.
    pub fn shifted(&self, axis: usize, delta: f64) -> Self {
        let mut coords = self.coords.clone();
        coords[axis] += delta;
        Self { coords }
    }

    /// Whether every coordinate of `other` lies within `tolerance` of ours.
    ///
    /// Points of different dimension are never close.
    pub fn is_close(&self, other: &Point, tolerance: f64) -> bool {
        self.dim() == other.dim()
            && self
                .coords
                .iter()
                .zip(&other.coords)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Euclidean distance to `other` over the shared coordinates.
    pub fn distance(&self, other: &Point) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Consumes the point, returning its coordinates.
    pub fn into_coords(self) -> Vec<f64> {
        self.coords
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

/// Space-separated coordinates, e.g. `1.5 -2`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_leaves_original_untouched() {
        let p = Point::from([0.0, 0.0]);
        let q = p.shifted(1, -1.0 / 128.0);
        assert_eq!(p.coords(), &[0.0, 0.0]);
        assert_eq!(q.coords(), &[0.0, -0.0078125]);
    }

    #[test]
    fn test_exact_equality() {
        let a = Point::from([0.1 + 0.2, 1.0]);
        let b = Point::from([0.3, 1.0]);
        assert_ne!(a, b, "exact equality must not round");
        assert!(a.is_close(&b, 1e-12));
    }

    #[test]
    fn test_is_close_dimension_mismatch() {
        let a = Point::from([1.0, 2.0]);
        let b = Point::from([1.0, 2.0, 3.0]);
        assert!(!a.is_close(&b, 10.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::from([0.0, 0.0]);
        let b = Point::from([3.0, 4.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let p = Point::from([1.5, -2.0]);
        assert_eq!(p.to_string(), "1.5 -2");
        assert_eq!(p[0], 1.5);
    }
}
