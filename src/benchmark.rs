//! Standard two-dimensional test landscapes.
//!
//! Each benchmark is an [`Objective`] with a natural search box and a
//! known global minimum, which makes it easy to see how far a local
//! search got.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::point::Point;
use crate::problem::Objective;

/// A named benchmark landscape over two coordinates.
///
/// # Panics
///
/// Evaluating a point with fewer than two coordinates panics. Extra
/// coordinates are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Benchmark {
    /// `x^2 + y^2`. One basin, useful as a sanity check.
    Sphere,
    /// Holder table: four deep corners on a field of ripples.
    HolderTable,
    /// Eggholder: very rugged, global minimum on the box edge.
    Eggholder,
    /// McCormick: smooth valley with a single minimum.
    McCormick,
}

impl Benchmark {
    /// All benchmarks, in declaration order.
    pub const ALL: [Benchmark; 4] = [
        Benchmark::Sphere,
        Benchmark::HolderTable,
        Benchmark::Eggholder,
        Benchmark::McCormick,
    ];

    /// Lower-case name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Sphere => "sphere",
            Benchmark::HolderTable => "holder-table",
            Benchmark::Eggholder => "eggholder",
            Benchmark::McCormick => "mccormick",
        }
    }

    /// The usual search box, one `(lower, upper)` pair per axis.
    pub fn bounds(&self) -> [(f64, f64); 2] {
        match self {
            Benchmark::Sphere | Benchmark::Eggholder => [(-512.0, 512.0), (-512.0, 512.0)],
            Benchmark::HolderTable => [(-10.0, 10.0), (-10.0, 10.0)],
            Benchmark::McCormick => [(-1.5, 4.0), (-3.0, 4.0)],
        }
    }

    /// One global minimizer and its value, from the literature.
    pub fn known_minimum(&self) -> (Point, f64) {
        match self {
            Benchmark::Sphere => (Point::from([0.0, 0.0]), 0.0),
            Benchmark::HolderTable => (Point::from([8.05502, 9.66459]), -19.2085),
            Benchmark::Eggholder => (Point::from([512.0, 404.2319]), -959.6407),
            Benchmark::McCormick => (Point::from([-0.54719, -1.54719]), -1.9133),
        }
    }
}

impl Objective for Benchmark {
    fn value(&self, p: &Point) -> f64 {
        let (x, y) = (p[0], p[1]);
        match self {
            Benchmark::Sphere => x * x + y * y,
            Benchmark::HolderTable => {
                let r = (x * x + y * y).sqrt();
                -(x.sin() * y.cos() * (1.0 - r / PI).abs().exp()).abs()
            }
            Benchmark::Eggholder => {
                let y47 = y + 47.0;
                -y47 * (x / 2.0 + y47).abs().sqrt().sin() - x * (x - y47).abs().sqrt().sin()
            }
            Benchmark::McCormick => (x + y).sin() + (x - y).powi(2) - 1.5 * x + 2.5 * y + 1.0,
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase().replace('_', "-");
        Benchmark::ALL
            .into_iter()
            .find(|b| b.name() == key || (key == "holdertable" && *b == Benchmark::HolderTable))
            .ok_or_else(|| SearchError::InvalidConfig(format!("unknown benchmark '{s}'")))
    }
}
