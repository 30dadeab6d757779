use super::*;

const SAMPLE_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>morning walk</name>
    <Placemark>
      <name>start</name>
      <Point><coordinates>23.72,37.98,120.5</coordinates></Point>
    </Placemark>
    <Placemark>
      <name>summit</name>
      <Point><coordinates>23.74,37.99</coordinates></Point>
    </Placemark>
    <Placemark>
      <name>trail</name>
      <LineString><coordinates>0.0,1.0,2.0 3.0,4.0,5.0</coordinates></LineString>
    </Placemark>
  </Document>
</kml>"#;

#[test]
fn can_read_named_points() {
    let points = SAMPLE_KML.read_kml().expect("cannot read kml");

    assert_eq!(points.len(), 4);

    assert_eq!(points[0].name.as_deref(), Some("start"));
    assert_eq!(points[0].longitude, 23.72);
    assert_eq!(points[0].latitude, 37.98);
    assert_eq!(points[0].elevation, 120.5);

    // elevation is optional in kml tuples
    assert_eq!(points[1].name.as_deref(), Some("summit"));
    assert_eq!(points[1].elevation, 0.);
}

#[test]
fn can_read_line_string_points_without_names() {
    let points = SAMPLE_KML.read_kml().expect("cannot read kml");

    assert_eq!(points[2].name, None);
    assert_eq!(points[2].longitude, 0.);
    assert_eq!(points[2].latitude, 1.);
    assert_eq!(points[3].name, None);
    assert_eq!(points[3].elevation, 5.);
}

#[test]
fn can_ignore_document_level_name() {
    let points = SAMPLE_KML.read_kml().expect("cannot read kml");

    assert!(points.iter().all(|point| point.name.as_deref() != Some("morning walk")));
}

#[test]
fn can_read_from_owned_string() {
    let points = SAMPLE_KML.to_string().read_kml().expect("cannot read kml");

    assert_eq!(points.len(), 4);
}

#[test]
fn cannot_read_malformed_coordinates() {
    let content = "<kml><Placemark><coordinates>abc,1.0</coordinates></Placemark></kml>";

    let result = content.read_kml();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot parse coordinates"));
}

#[test]
fn cannot_read_truncated_tuple() {
    let content = "<kml><Placemark><coordinates>1.0</coordinates></Placemark></kml>";

    let result = content.read_kml();

    assert!(result.is_err());
}
