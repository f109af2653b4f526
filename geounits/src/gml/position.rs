use super::{format_number, parse_value, read_node, write_text_element, GmlElement, Node};
use crate::angle::{Latitude, Longitude};
use crate::error::{GeoUnitsError, ParseError, ParseFailure};
use crate::geo::{Position, Position3d};
use crate::quantity::{Distance, DistanceUnit};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Coordinates of a point as stored in GML: longitude first, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Coordinates {
    pub(crate) longitude: f64,
    pub(crate) latitude: f64,
    pub(crate) altitude: Option<f64>,
}

impl Coordinates {
    pub(crate) fn of(position: &Position) -> Self {
        Self {
            longitude: position.lon(),
            latitude: position.lat(),
            altitude: None,
        }
    }

    pub(crate) fn position(&self) -> Position {
        Position::new(Latitude::new(self.latitude), Longitude::new(self.longitude))
    }

    pub(crate) fn to_text(self) -> String {
        let mut text = format!(
            "{} {}",
            format_number(self.longitude),
            format_number(self.latitude)
        );
        if let Some(altitude) = self.altitude {
            text.push(' ');
            text.push_str(&format_number(altitude));
        }
        text
    }

    /// Parses `lon lat [alt]`.
    pub(crate) fn parse(kind: &'static str, text: &str) -> Result<Self, GeoUnitsError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [longitude, latitude] => Ok(Self {
                longitude: parse_value(kind, longitude)?,
                latitude: parse_value(kind, latitude)?,
                altitude: None,
            }),
            [longitude, latitude, altitude] => Ok(Self {
                longitude: parse_value(kind, longitude)?,
                latitude: parse_value(kind, latitude)?,
                altitude: Some(parse_value(kind, altitude)?),
            }),
            [_, _, _, ..] => Err(ParseError::new(
                kind,
                text,
                ParseFailure::TooManyComponents(tokens.len()),
            )
            .into()),
            _ => Err(GeoUnitsError::Gml(format!(
                "expected longitude and latitude, found {text:?}"
            ))),
        }
    }

    /// Reads `<pos>` or the legacy `<coord>` element.
    pub(crate) fn read(kind: &'static str, node: &Node) -> Result<Self, GeoUnitsError> {
        if node.is("pos") {
            return Self::parse(kind, node.text());
        }

        if node.is("coord") {
            log::debug!("reading legacy <coord> element as {kind}");
            let altitude = match node.child("Z") {
                Some(z) => Some(parse_value(kind, z.text())?),
                None => None,
            };

            return Ok(Self {
                longitude: parse_value(kind, node.required_child("X")?.text())?,
                latitude: parse_value(kind, node.required_child("Y")?.text())?,
                altitude,
            });
        }

        Err(node.unexpected("<pos> or <coord>"))
    }
}

impl GmlElement for Position {
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError> {
        write_text_element(writer, "pos", &Coordinates::of(self).to_text())
    }

    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError> {
        let node = read_node(reader)?;
        Ok(Coordinates::read("Position", &node)?.position())
    }
}

impl GmlElement for Position3d {
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError> {
        let coordinates = Coordinates {
            altitude: Some(self.altitude().to_meters().value()),
            ..Coordinates::of(&self.position())
        };
        write_text_element(writer, "pos", &coordinates.to_text())
    }

    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError> {
        let node = read_node(reader)?;
        let coordinates = Coordinates::read("Position3d", &node)?;
        let altitude = Distance::new(coordinates.altitude.unwrap_or(0.0), DistanceUnit::Meters);
        Ok(Position3d::new(coordinates.position(), altitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use assert_matches::assert_matches;

    #[test]
    fn write_position() {
        let gml = latlon!(39.5, -105.25).to_gml_string().unwrap();
        assert_eq!(gml, "<pos>-105.25 39.5</pos>");
    }

    #[test]
    fn write_position_3d() {
        let position = Position3d::new(
            latlon!(39.5, -105.25),
            Distance::new(1.5, DistanceUnit::Kilometers),
        );
        assert_eq!(position.to_gml_string().unwrap(), "<pos>-105.25 39.5 1500</pos>");
    }

    #[test]
    fn round_trip() {
        let position = latlon!(1.0 / 3.0, -179.123_456_789);
        let read = Position::from_gml_str(&position.to_gml_string().unwrap()).unwrap();
        assert_eq!(read, position);

        let position = Position3d::new(position, Distance::new(-12.25, DistanceUnit::Meters));
        let read = Position3d::from_gml_str(&position.to_gml_string().unwrap()).unwrap();
        assert_eq!(read, position);
    }

    #[test]
    fn read_legacy_coord() {
        let gml = "<coord><X>-105.25</X><Y>39.5</Y></coord>";
        assert_eq!(Position::from_gml_str(gml).unwrap(), latlon!(39.5, -105.25));

        let gml = "<coord>\n  <X>-105.25</X>\n  <Y>39.5</Y>\n  <Z>100</Z>\n</coord>";
        let position = Position3d::from_gml_str(gml).unwrap();
        assert_eq!(position.position(), latlon!(39.5, -105.25));
        assert_eq!(position.altitude().value(), 100.0);
    }

    #[test]
    fn read_2d_as_3d() {
        let position = Position3d::from_gml_str("<pos>1 2</pos>").unwrap();
        assert_eq!(position.altitude(), Distance::EMPTY);
    }

    #[test]
    fn read_errors() {
        assert_matches!(
            Position::from_gml_str("<pos>1 2 3 4</pos>"),
            Err(GeoUnitsError::Parse(err))
                if matches!(err.failure(), ParseFailure::TooManyComponents(4))
        );
        assert_matches!(Position::from_gml_str("<pos>1</pos>"), Err(GeoUnitsError::Gml(_)));
        assert_matches!(
            Position::from_gml_str("<coord><X>1</X></coord>"),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            Position::from_gml_str("<pos>east 2</pos>"),
            Err(GeoUnitsError::Parse(_))
        );
        assert_matches!(
            Position::from_gml_str(r#"<angle uom="degrees">1</angle>"#),
            Err(GeoUnitsError::Gml(_))
        );
    }
}
