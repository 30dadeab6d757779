use super::*;
use crate::helpers::*;
use crate::utils::get_cpus;

const EPSILON: f64 = 1E-9;

fn create_planner() -> NearestNeighborPlanner {
    NearestNeighborPlanner::new(PointMatcher::default(), test_environment())
}

fn create_scattered_points() -> Vec<Point> {
    vec![
        Point::new_named(0., 0., 0., "p0"),
        Point::new_named(4., 4., 0., "p1"),
        Point::new_named(1., 0., 0., "p2"),
        Point::new_named(0., 3., 1., "p3"),
        Point::new_named(2., 2., 2., "p4"),
        Point::new_named(5., 0., 0., "p5"),
        Point::new_named(3., 1., 0., "p6"),
    ]
}

#[test]
fn can_solve_three_point_scenario() {
    let tour = create_planner().solve(create_abc_triangle()).expect("cannot solve");

    let names: Vec<_> = tour.points().iter().map(|point| point.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(tour.length(), 2.);
}

#[test]
fn can_produce_permutation_of_input() {
    let points = create_scattered_points();
    let size = points.len();

    let tour = create_planner().solve(points).expect("cannot solve");

    assert_eq!(tour.size(), size);
    let mut names: Vec<_> = tour.points().iter().map(|point| point.name.clone().unwrap()).collect();
    names.sort();
    let expected: Vec<_> = (0..size).map(|index| format!("p{index}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn can_recompute_length_from_returned_sequence() {
    let tour = create_planner().solve(create_scattered_points()).expect("cannot solve");

    let oracle = DistanceOracle::default();
    let recomputed = tour
        .points()
        .windows(2)
        .map(|pair| oracle.distance_cached(&pair[0], &pair[1]).unwrap())
        .sum::<f64>();

    assert!((recomputed - tour.length()).abs() < EPSILON);
}

#[test]
fn can_return_minimum_over_all_candidate_starts() {
    let points: Vec<_> = create_scattered_points().into_iter().map(std::sync::Arc::new).collect();
    let mut oracle = DistanceOracle::default();
    let adjacency = AdjacencyIndex::new(&points, &mut oracle).expect("cannot create index");

    let best = create_planner().solve(create_scattered_points()).expect("cannot solve");

    for start in 0..points.len() {
        let candidate = construct_from(start, &points, &adjacency, &oracle).expect("cannot construct");
        assert!(best.length() <= candidate.length() + EPSILON);
    }
}

#[test]
fn can_be_deterministic_with_parallel_candidates() {
    let environment = Arc::new(Environment::new(get_cpus(), test_logger()));
    let planner = NearestNeighborPlanner::new(PointMatcher::default(), environment);

    let first = planner.solve(create_scattered_points()).expect("cannot solve");
    let second = planner.solve(create_scattered_points()).expect("cannot solve");

    assert_eq!(first.length().to_bits(), second.length().to_bits());
    let first_names: Vec<_> = first.points().iter().map(|point| point.name.clone()).collect();
    let second_names: Vec<_> = second.points().iter().map(|point| point.name.clone()).collect();
    assert_eq!(first_names, second_names);
}

#[test]
fn can_solve_single_point() {
    let tour = create_planner().solve(vec![Point::new(1., 2., 3.)]).expect("cannot solve");

    assert_eq!(tour.size(), 1);
    assert_eq!(tour.length(), 0.);
}

#[test]
fn cannot_solve_empty_input() {
    let result = create_planner().solve(vec![]);

    assert_eq!(result.err(), Some(PlannerError::EmptyInput));
}

#[test]
fn cannot_solve_duplicates_by_coordinates() {
    let points = vec![Point::new(0., 0., 0.), Point::new(1., 1., 1.), Point::new(0., 0., 0.)];

    let result = create_planner().solve(points);

    assert_eq!(result.err(), Some(PlannerError::DuplicatePoint { first: 0, second: 2 }));
}

#[test]
fn cannot_solve_duplicates_by_name() {
    let planner = NearestNeighborPlanner::new(PointMatcher::ByName, test_environment());
    let points = vec![Point::new_named(0., 0., 0., "a"), Point::new_named(5., 5., 5., "a")];

    let result = planner.solve(points);

    assert_eq!(result.err(), Some(PlannerError::DuplicatePoint { first: 0, second: 1 }));
}

#[test]
fn cannot_solve_non_finite_input() {
    let points = vec![Point::new(0., 0., 0.), Point::new_named(f64::INFINITY, 0., 0., "broken")];

    let result = create_planner().solve(points);

    assert_eq!(result.err(), Some(PlannerError::InvalidCoordinate { point: "broken".to_string() }));
}
