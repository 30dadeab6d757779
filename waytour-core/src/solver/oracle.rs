#[cfg(test)]
#[path = "../../tests/unit/solver/oracle_test.rs"]
mod oracle_test;

use crate::models::{Distance, Point};
use crate::solver::{PlannerError, PlannerResult};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Computes and memoizes pairwise euclidean distances between points.
///
/// The cache is owned by the oracle instance, so its lifetime is bound to a single
/// planning run. Entries are keyed by the unordered pair of point identities which
/// keeps memoization symmetric: `distance(a, b)` and `distance(b, a)` share one entry.
#[derive(Debug, Default)]
pub struct DistanceOracle {
    cache: FxHashMap<(usize, usize), Distance>,
}

impl DistanceOracle {
    /// Returns euclidean distance between two points memoizing the result.
    pub fn distance(&mut self, from: &Arc<Point>, to: &Arc<Point>) -> PlannerResult<Distance> {
        let key = cache_key(from, to);

        if let Some(&distance) = self.cache.get(&key) {
            return Ok(distance);
        }

        let distance = compute_distance(from, to)?;
        self.cache.insert(key, distance);

        Ok(distance)
    }

    /// Returns euclidean distance between two points without modifying the cache:
    /// a miss falls back to a fresh computation. This keeps the oracle shareable across
    /// threads once the cache has been populated by adjacency construction.
    pub fn distance_cached(&self, from: &Arc<Point>, to: &Arc<Point>) -> PlannerResult<Distance> {
        match self.cache.get(&cache_key(from, to)) {
            Some(&distance) => Ok(distance),
            None => compute_distance(from, to),
        }
    }

    /// Returns amount of memoized pairs.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Returns an order-independent cache key based on point identities (allocation addresses).
fn cache_key(from: &Arc<Point>, to: &Arc<Point>) -> (usize, usize) {
    let from = Arc::as_ptr(from) as usize;
    let to = Arc::as_ptr(to) as usize;

    if from < to { (from, to) } else { (to, from) }
}

fn compute_distance(from: &Point, to: &Point) -> PlannerResult<Distance> {
    if let Some(point) = [from, to].into_iter().find(|point| !point.has_finite_coordinates()) {
        return Err(PlannerError::InvalidCoordinate { point: point.to_string() });
    }

    let lat = from.latitude - to.latitude;
    let lon = from.longitude - to.longitude;
    let ele = from.elevation - to.elevation;

    Ok((lat * lat + lon * lon + ele * ele).sqrt())
}
