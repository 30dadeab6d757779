#[cfg(test)]
#[path = "../../tests/unit/solver/adjacency_test.rs"]
mod adjacency_test;

use crate::models::{Distance, Point};
use crate::solver::{DistanceOracle, PlannerResult};
use crate::utils::compare_floats;
use std::sync::Arc;

/// Stores, for every point, all other points ordered by ascending distance from it.
///
/// Sorting is stable, so equidistant neighbors keep their original input order and
/// greedy construction stays deterministic. The index is built once per planning run
/// and is read-only afterwards.
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Creates a new index over given points. Populates the oracle cache with all
    /// pairwise distances as a side effect, which makes later lookups cache hits.
    pub fn new(points: &[Arc<Point>], oracle: &mut DistanceOracle) -> PlannerResult<Self> {
        let neighbors = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let mut sorted: Vec<(usize, Distance)> = Vec::with_capacity(points.len().saturating_sub(1));

                for (other_index, other) in points.iter().enumerate() {
                    if other_index != index {
                        sorted.push((other_index, oracle.distance(point, other)?));
                    }
                }

                sorted.sort_by(|(_, left), (_, right)| compare_floats(*left, *right));

                Ok(sorted.into_iter().map(|(other_index, _)| other_index).collect())
            })
            .collect::<PlannerResult<Vec<_>>>()?;

        Ok(Self { neighbors })
    }

    /// Returns neighbors of the point at given index, closest first. A single point
    /// input yields an empty list.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors[index].as_slice()
    }

    /// Returns index of the single nearest neighbor of the point at given index, if any.
    pub fn nearest(&self, index: usize) -> Option<usize> {
        self.neighbors.get(index).and_then(|list| list.first().copied())
    }

    /// Returns amount of indexed points.
    pub fn size(&self) -> usize {
        self.neighbors.len()
    }
}
