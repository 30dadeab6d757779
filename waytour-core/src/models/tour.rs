#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::common::Distance;
use crate::models::point::Point;
use crate::solver::{DistanceOracle, PlannerError, PlannerResult};
use std::sync::Arc;

/// Represents a tour: an ordered, non-repeating sequence of points with a derived total length.
///
/// Points are shared with the planning run which produced the tour, not duplicated.
/// The length is computed once at construction and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Tour {
    points: Vec<Arc<Point>>,
    length: Distance,
}

impl Tour {
    /// Creates a new tour from an ordered sequence of points computing its total length
    /// as the sum of consecutive pairwise distances via given oracle.
    ///
    /// A single point tour has length 0. An empty sequence is refused with `EmptyInput`.
    /// Distinctness of the points is the planner's construction discipline, it is not
    /// enforced here.
    pub fn new(points: Vec<Arc<Point>>, oracle: &DistanceOracle) -> PlannerResult<Self> {
        if points.is_empty() {
            return Err(PlannerError::EmptyInput);
        }

        let length = points
            .windows(2)
            .try_fold(0., |acc, pair| oracle.distance_cached(&pair[0], &pair[1]).map(|distance| acc + distance))?;

        Ok(Self { points, length })
    }

    /// Returns amount of points in the tour.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns the total length of the tour.
    pub fn length(&self) -> Distance {
        self.length
    }

    /// Returns points in visiting order.
    pub fn points(&self) -> &[Arc<Point>] {
        self.points.as_slice()
    }
}
