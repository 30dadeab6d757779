#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::models::common::Float;
use std::fmt;

/// Default absolute tolerance used by coordinate based point comparison.
const DEFAULT_TOLERANCE: Float = 1E-9;

/// Represents an immutable point in 3D geographic space.
///
/// No bounds are enforced on the coordinate values: they are not required to be valid
/// geographic ranges, only finite real numbers (validated by the distance oracle).
#[derive(Clone, Debug)]
pub struct Point {
    /// Latitude value.
    pub latitude: Float,
    /// Longitude value.
    pub longitude: Float,
    /// Elevation value.
    pub elevation: Float,
    /// An optional name identifier.
    pub name: Option<String>,
}

impl Point {
    /// Creates a new instance of `Point` without a name.
    pub fn new(latitude: Float, longitude: Float, elevation: Float) -> Self {
        Self { latitude, longitude, elevation, name: None }
    }

    /// Creates a new instance of `Point` with a name identifier.
    pub fn new_named(latitude: Float, longitude: Float, elevation: Float, name: impl Into<String>) -> Self {
        Self { latitude, longitude, elevation, name: Some(name.into()) }
    }

    /// Checks whether all coordinate values are finite real numbers.
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.elevation.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "({}, {}, {})", self.latitude, self.longitude, self.elevation),
        }
    }
}

/// Specifies the way two points are compared for equality.
///
/// Historically, point equality shifted between name based and coordinate based semantics,
/// so the rule is exposed as an explicit strategy instead of a hidden `PartialEq` impl.
#[derive(Clone, Copy, Debug)]
pub enum PointMatcher {
    /// Compares name identifiers when both points carry one, falls back to exact
    /// coordinate equality otherwise.
    ByName,
    /// Compares coordinates within given absolute tolerance.
    ByCoordinates {
        /// Maximum absolute difference per coordinate for two points to be considered the same.
        tolerance: Float,
    },
}

impl Default for PointMatcher {
    fn default() -> Self {
        Self::ByCoordinates { tolerance: DEFAULT_TOLERANCE }
    }
}

impl PointMatcher {
    /// Checks whether two points are considered the same.
    pub fn matches(&self, lhs: &Point, rhs: &Point) -> bool {
        match self {
            Self::ByName => match (&lhs.name, &rhs.name) {
                (Some(lhs_name), Some(rhs_name)) => lhs_name == rhs_name,
                _ => same_coordinates(lhs, rhs, 0.),
            },
            Self::ByCoordinates { tolerance } => same_coordinates(lhs, rhs, *tolerance),
        }
    }
}

fn same_coordinates(lhs: &Point, rhs: &Point, tolerance: Float) -> bool {
    (lhs.latitude - rhs.latitude).abs() <= tolerance
        && (lhs.longitude - rhs.longitude).abs() <= tolerance
        && (lhs.elevation - rhs.elevation).abs() <= tolerance
}
