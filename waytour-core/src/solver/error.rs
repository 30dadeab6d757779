use std::fmt;

/// Specifies errors returned by the tour planning components.
///
/// All conditions are detected at the boundary where they are first observable and
/// propagated immediately: no partial or best-effort tours are ever returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// Zero points were given to a planner.
    EmptyInput,
    /// Two input points compare equal under the configured matcher.
    DuplicatePoint {
        /// Input index of the earlier of the two points.
        first: usize,
        /// Input index of the later of the two points.
        second: usize,
    },
    /// A point contains a non-finite coordinate value.
    InvalidCoordinate {
        /// Label of the offending point.
        point: String,
    },
    /// Greedy construction could not find an unvisited candidate although unvisited
    /// points remain. Indicates an adjacency construction bug and is fatal: it must
    /// never be handled by truncating the tour.
    InternalInconsistency {
        /// Label of the point whose adjacency list was exhausted.
        point: String,
        /// Construction step at which the candidate scan failed.
        step: usize,
    },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot plan a tour over zero points"),
            Self::DuplicatePoint { first, second } => {
                write!(f, "points at indices {first} and {second} compare equal")
            }
            Self::InvalidCoordinate { point } => {
                write!(f, "point {point} contains a non-finite coordinate")
            }
            Self::InternalInconsistency { point, step } => {
                write!(f, "no unvisited candidate in adjacency list of {point} at step {step}")
            }
        }
    }
}

impl std::error::Error for PlannerError {}

/// A type alias for result type with `PlannerError`.
pub type PlannerResult<T> = Result<T, PlannerError>;
