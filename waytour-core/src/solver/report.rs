#[cfg(test)]
#[path = "../../tests/unit/solver/report_test.rs"]
mod report_test;

use crate::models::{Distance, Tour};
use std::fmt;

/// A read-only summary of a planned tour for logging and printing.
#[derive(Clone, Debug)]
pub struct TourSummary {
    /// Amount of points in the tour.
    pub size: usize,
    /// Total tour length, kept at full precision.
    pub length: Distance,
}

impl TourSummary {
    /// Creates a summary of given tour.
    pub fn new(tour: &Tour) -> Self {
        Self { size: tour.size(), length: tour.length() }
    }
}

impl fmt::Display for TourSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fixed precision for display only, the stored length stays full precision
        write!(f, "tour(size={}, length={:.3})", self.size, self.length)
    }
}
