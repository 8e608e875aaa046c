//! Visited-point memory for Tabu Search.

use std::collections::VecDeque;

use crate::point::Point;

/// Ordered record of the points a tabu run has committed to.
///
/// Unbounded by default. With a tenure, only the most recent `tenure`
/// points are kept and older ones become admissible again.
///
/// Membership uses exact [`Point`] equality unless a tolerance is set.
/// With continuous steps exact repeats are rare, but they do happen after
/// a closed walk (e.g. `+x, +y, -x, -y`).
#[derive(Debug, Clone)]
pub(crate) struct TabuHistory {
    points: VecDeque<Point>,
    tenure: Option<usize>,
    tolerance: Option<f64>,
}

impl TabuHistory {
    /// Starts a history containing only `start`.
    pub(crate) fn new(start: Point, tenure: Option<usize>, tolerance: Option<f64>) -> Self {
        let mut points = VecDeque::new();
        points.push_back(start);
        Self {
            points,
            tenure,
            tolerance,
        }
    }

    /// Whether `point` counts as already visited.
    pub(crate) fn contains(&self, point: &Point) -> bool {
        match self.tolerance {
            None => self.points.iter().any(|p| p == point),
            Some(t) => self.points.iter().any(|p| p.is_close(point, t)),
        }
    }

    /// Appends `point`, evicting the oldest entry once over tenure.
    ///
    /// The just-pushed point is never evicted, so the history is never empty.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push_back(point);
        if let Some(tenure) = self.tenure {
            while self.points.len() > tenure.max(1) {
                self.points.pop_front();
            }
        }
    }

    /// Number of points currently remembered.
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterates from oldest to newest.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &Point> {
        self.points.iter()
    }

    /// Consumes the history, oldest first.
    pub(crate) fn into_vec(self) -> Vec<Point> {
        self.points.into()
    }
}
