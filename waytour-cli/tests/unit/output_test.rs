use super::*;
use std::sync::Arc;
use waytour_core::prelude::{DistanceOracle, Point, Tour};

fn create_test_tour() -> Tour {
    let points = vec![Arc::new(Point::new_named(0., 0., 0., "a")), Arc::new(Point::new(1., 0., 0.))];
    let oracle = DistanceOracle::default();

    Tour::new(points, &oracle).expect("cannot create tour")
}

#[test]
fn can_serialize_tour_as_json() {
    let mut buffer = BufWriter::new(Vec::new());

    serialize_tour(&create_test_tour(), &mut buffer).expect("cannot serialize");

    let data = buffer.into_inner().expect("cannot flush buffer");
    let json: serde_json::Value = serde_json::from_slice(data.as_slice()).expect("invalid json");

    assert_eq!(json["size"], 2);
    assert_eq!(json["length"], 1.);
    assert_eq!(json["points"][0]["name"], "a");
    assert_eq!(json["points"][0]["latitude"], 0.);
    assert_eq!(json["points"][1]["longitude"], 0.);
}

#[test]
fn can_skip_missing_names() {
    let mut buffer = BufWriter::new(Vec::new());

    serialize_tour(&create_test_tour(), &mut buffer).expect("cannot serialize");

    let data = buffer.into_inner().expect("cannot flush buffer");
    let json: serde_json::Value = serde_json::from_slice(data.as_slice()).expect("invalid json");

    assert!(json["points"][1].get("name").is_none());
}
