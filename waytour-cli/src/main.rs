//! A command line interface to the nearest-neighbor tour planner.

use std::fs::File;
use std::io::BufWriter;
use std::process::exit;
use std::sync::Arc;
use waytour_cli::args::*;
use waytour_cli::kml::KmlPoints;
use waytour_cli::output::serialize_tour;
use waytour_cli::plot::draw_tour;
use waytour_core::prelude::*;
use waytour_core::utils::get_cpus;

fn main() {
    let matches = get_arg_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> GenericResult<()> {
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("no input file given")?;
    let matcher = match matches.get_one::<String>(MATCHER_ARG_NAME).map(String::as_str) {
        Some("name") => PointMatcher::ByName,
        _ => PointMatcher::default(),
    };

    let logger: InfoLogger = if matches.get_flag(QUIET_ARG_NAME) {
        Arc::new(|_: &str| {})
    } else {
        Arc::new(|message: &str| println!("{message}"))
    };
    let environment = Arc::new(Environment::new(get_cpus(), logger.clone()));

    let timer = Timer::start();

    let points = File::open(input_path)?.read_kml()?;
    (logger)(&format!("read {} points from '{input_path}'", points.len()));

    let planner = NearestNeighborPlanner::new(matcher, environment);
    let tour = planner.solve(points)?;

    let summary = TourSummary::new(&tour);
    (logger)(&format!("{summary}, found in {}ms", timer.elapsed_millis()));

    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let file = File::create(path)?;
        serialize_tour(&tour, &mut BufWriter::new(file))?;
        (logger)(&format!("tour written to '{path}'"));
    }

    if let Some(path) = matches.get_one::<String>(PLOT_ARG_NAME) {
        draw_tour(&tour, path)?;
        (logger)(&format!("plot written to '{path}'"));
    }

    Ok(())
}
