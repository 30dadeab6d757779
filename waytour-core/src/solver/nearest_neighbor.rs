#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use crate::models::{Point, PointMatcher, Tour};
use crate::solver::{AdjacencyIndex, DistanceOracle, PlannerError, PlannerResult, TourPlanner};
use crate::utils::{Environment, ThreadPool, parallel_collect};
use std::sync::Arc;

/// A tour planner which runs a greedy nearest-unvisited-neighbor construction from every
/// point as a candidate start and keeps the shortest tour found.
///
/// Tours are open paths: the last-to-first edge is never added.
pub struct NearestNeighborPlanner {
    matcher: PointMatcher,
    environment: Arc<Environment>,
}

impl Default for NearestNeighborPlanner {
    fn default() -> Self {
        Self::new(PointMatcher::default(), Arc::new(Environment::default()))
    }
}

impl NearestNeighborPlanner {
    /// Creates a new instance of `NearestNeighborPlanner`.
    pub fn new(matcher: PointMatcher, environment: Arc<Environment>) -> Self {
        Self { matcher, environment }
    }

    /// Validates the input at planner entry: strict distinctness under the configured matcher.
    fn validate(&self, points: &[Point]) -> PlannerResult<()> {
        if points.is_empty() {
            return Err(PlannerError::EmptyInput);
        }

        for (second, point) in points.iter().enumerate().skip(1) {
            if let Some(first) = points[..second].iter().position(|other| self.matcher.matches(other, point)) {
                return Err(PlannerError::DuplicatePoint { first, second });
            }
        }

        Ok(())
    }
}

impl TourPlanner for NearestNeighborPlanner {
    fn solve(&self, points: Vec<Point>) -> PlannerResult<Tour> {
        self.validate(&points)?;

        let points: Vec<Arc<Point>> = points.into_iter().map(Arc::new).collect();

        let mut oracle = DistanceOracle::default();
        let adjacency = AdjacencyIndex::new(&points, &mut oracle)?;

        (self.environment.logger)(&format!("built adjacency index over {} points", points.len()));

        // candidate runs read only shared immutable state (points, adjacency, populated
        // cache), so they can run on the thread pool without locking
        let starts: Vec<usize> = (0..points.len()).collect();
        let pool = ThreadPool::new(self.environment.parallelism);
        let candidates =
            pool.execute(|| parallel_collect(&starts, |&start| construct_from(start, &points, &adjacency, &oracle)));

        // selection is serialized in input-start order: first found smallest length wins
        let mut best: Option<Tour> = None;
        for candidate in candidates {
            let candidate = candidate?;
            if best.as_ref().is_none_or(|tour| candidate.length() < tour.length()) {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(PlannerError::EmptyInput)?;

        (self.environment.logger)(&format!(
            "selected tour of length {} among {} candidate starts",
            best.length(),
            points.len()
        ));

        Ok(best)
    }
}

/// Runs greedy construction from given start: repeatedly scans the adjacency list of the
/// last added point and appends the first point not yet visited.
fn construct_from(
    start: usize,
    points: &[Arc<Point>],
    adjacency: &AdjacencyIndex,
    oracle: &DistanceOracle,
) -> PlannerResult<Tour> {
    let mut visited = vec![false; points.len()];
    visited[start] = true;

    let mut sequence = Vec::with_capacity(points.len());
    sequence.push(start);

    let mut last = start;
    for step in 1..points.len() {
        let next = adjacency
            .neighbors(last)
            .iter()
            .copied()
            .find(|&candidate| !visited[candidate])
            .ok_or_else(|| PlannerError::InternalInconsistency { point: points[last].to_string(), step })?;

        visited[next] = true;
        sequence.push(next);
        last = next;
    }

    Tour::new(sequence.into_iter().map(|index| points[index].clone()).collect(), oracle)
}
