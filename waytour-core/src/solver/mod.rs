//! Contains the tour planning logic: a memoizing distance oracle, a per-point adjacency
//! index, and a nearest-neighbor planner which tries every point as a candidate start.

use crate::models::{Point, Tour};

mod error;
pub use self::error::*;

mod oracle;
pub use self::oracle::*;

mod adjacency;
pub use self::adjacency::*;

mod nearest_neighbor;
pub use self::nearest_neighbor::*;

mod report;
pub use self::report::*;

/// A capability contract for tour planners.
///
/// Today the only variant is the nearest-neighbor heuristic; an exact or improving
/// (e.g. 2-opt) variant is supposed to conform to the same contract.
pub trait TourPlanner {
    /// Plans a visiting order over given points returning the best tour found.
    fn solve(&self, points: Vec<Point>) -> PlannerResult<Tour>;
}
