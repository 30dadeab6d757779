#[cfg(test)]
#[path = "../tests/unit/kml_test.rs"]
mod kml_test;

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use waytour_core::prelude::{GenericError, GenericResult, Point};

/// A trait to read points from KML content.
pub trait KmlPoints {
    /// Reads KML content into a list of points in document order.
    fn read_kml(self) -> GenericResult<Vec<Point>>;
}

impl KmlPoints for &str {
    fn read_kml(self) -> GenericResult<Vec<Point>> {
        read_kml_content(self)
    }
}

impl KmlPoints for String {
    fn read_kml(self) -> GenericResult<Vec<Point>> {
        read_kml_content(self.as_str())
    }
}

impl KmlPoints for File {
    fn read_kml(mut self) -> GenericResult<Vec<Point>> {
        let mut content = String::new();
        self.read_to_string(&mut content)?;

        read_kml_content(content.as_str())
    }
}

enum Capture {
    Name,
    Coordinates,
}

fn read_kml_content(content: &str) -> GenericResult<Vec<Point>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut points = Vec::new();
    let mut in_placemark = false;
    let mut capture: Option<Capture> = None;
    let mut pending_name: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => match tag.name().as_ref() {
                b"Placemark" => {
                    in_placemark = true;
                    pending_name = None;
                }
                b"name" if in_placemark => capture = Some(Capture::Name),
                b"coordinates" => capture = Some(Capture::Coordinates),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                let text =
                    text.unescape().map_err(|err| GenericError::from(format!("cannot read kml text: {err}")))?;
                match capture {
                    Some(Capture::Name) => pending_name = Some(text.trim().to_string()),
                    Some(Capture::Coordinates) => {
                        parse_coordinates(text.as_ref(), pending_name.take(), &mut points)?
                    }
                    None => {}
                }
            }
            Ok(Event::End(tag)) => {
                if tag.name().as_ref() == b"Placemark" {
                    in_placemark = false;
                    pending_name = None;
                }
                capture = None;
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(format!("malformed kml: {err}").into()),
            _ => {}
        }
    }

    Ok(points)
}

/// Parses the content of a single coordinates element: whitespace separated
/// `lon,lat[,ele]` tuples. The placemark name is attached only when the element holds
/// exactly one tuple, so line strings stay unnamed.
fn parse_coordinates(text: &str, name: Option<String>, points: &mut Vec<Point>) -> GenericResult<()> {
    let tuples: Vec<&str> = text.split_whitespace().collect();

    for tuple in tuples.iter() {
        let mut values = tuple.split(',');

        let longitude = parse_value(values.next(), tuple)?;
        let latitude = parse_value(values.next(), tuple)?;
        let elevation = match values.next() {
            Some(value) => parse_value(Some(value), tuple)?,
            None => 0.,
        };

        points.push(match (&name, tuples.len()) {
            (Some(name), 1) => Point::new_named(latitude, longitude, elevation, name.clone()),
            _ => Point::new(latitude, longitude, elevation),
        });
    }

    Ok(())
}

fn parse_value(value: Option<&str>, tuple: &str) -> GenericResult<f64> {
    value
        .ok_or_else(|| GenericError::from(format!("cannot parse coordinates from '{tuple}': missing value")))?
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("cannot parse coordinates from '{tuple}': {err}").into())
}
