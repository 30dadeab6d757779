use plotters::prelude::*;
use waytour_core::prelude::{GenericError, GenericResult, Tour};

const PLOT_SIZE: (u32, u32) = (1024, 768);

/// Draws the tour as a 3D polyline with point markers into given bitmap file.
pub fn draw_tour(tour: &Tour, path: &str) -> GenericResult<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_generic)?;

    let (lat, lon, ele) = coordinate_ranges(tour);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("tour of {} points", tour.size()), ("sans-serif", 30))
        .build_cartesian_3d(lat.0..lat.1, lon.0..lon.1, ele.0..ele.1)
        .map_err(to_generic)?;

    chart.configure_axes().draw().map_err(to_generic)?;

    chart
        .draw_series(LineSeries::new(
            tour.points().iter().map(|point| (point.latitude, point.longitude, point.elevation)),
            &BLUE,
        ))
        .map_err(to_generic)?;

    chart
        .draw_series(
            tour.points()
                .iter()
                .map(|point| Circle::new((point.latitude, point.longitude, point.elevation), 3, RED.filled())),
        )
        .map_err(to_generic)?;

    root.present().map_err(to_generic)?;

    Ok(())
}

fn to_generic<E: std::fmt::Display>(err: E) -> GenericError {
    format!("cannot draw plot: {err}").into()
}

/// Returns per-axis value ranges, padded so degenerate (single value) axes still form
/// a drawable range.
fn coordinate_ranges(tour: &Tour) -> ((f64, f64), (f64, f64), (f64, f64)) {
    let mut ranges = [(f64::MAX, f64::MIN); 3];

    for point in tour.points().iter() {
        for (range, value) in ranges.iter_mut().zip([point.latitude, point.longitude, point.elevation]) {
            range.0 = range.0.min(value);
            range.1 = range.1.max(value);
        }
    }

    let padded = ranges.map(|(min, max)| {
        let margin = ((max - min) * 0.05).max(0.5);
        (min - margin, max + margin)
    });

    (padded[0], padded[1], padded[2])
}
