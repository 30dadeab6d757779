//! This module reimports commonly used types.

pub use crate::models::Distance;
pub use crate::models::Float;
pub use crate::models::Point;
pub use crate::models::PointMatcher;
pub use crate::models::Tour;

pub use crate::solver::AdjacencyIndex;
pub use crate::solver::DistanceOracle;
pub use crate::solver::NearestNeighborPlanner;
pub use crate::solver::PlannerError;
pub use crate::solver::PlannerResult;
pub use crate::solver::TourPlanner;
pub use crate::solver::TourSummary;

pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::compare_floats;
