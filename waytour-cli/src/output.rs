#[cfg(test)]
#[path = "../tests/unit/output_test.rs"]
mod output_test;

use serde::Serialize;
use std::io::{BufWriter, Write};
use waytour_core::prelude::{GenericResult, Tour};

/// A serializable view of a planned tour.
#[derive(Serialize)]
pub struct TourResult {
    /// Amount of points in the tour.
    pub size: usize,
    /// Total tour length at full precision.
    pub length: f64,
    /// Points in visiting order.
    pub points: Vec<PointResult>,
}

/// A serializable view of a single point.
#[derive(Serialize)]
pub struct PointResult {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TourResult {
    /// Creates a new instance of `TourResult` from given tour.
    pub fn new(tour: &Tour) -> Self {
        Self {
            size: tour.size(),
            length: tour.length(),
            points: tour
                .points()
                .iter()
                .map(|point| PointResult {
                    latitude: point.latitude,
                    longitude: point.longitude,
                    elevation: point.elevation,
                    name: point.name.clone(),
                })
                .collect(),
        }
    }
}

/// Serializes the planned tour as pretty printed json.
pub fn serialize_tour<W: Write>(tour: &Tour, writer: &mut BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &TourResult::new(tour))
        .map_err(|err| format!("cannot serialize tour: {err}").into())
}
