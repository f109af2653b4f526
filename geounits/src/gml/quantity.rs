use super::{format_number, parse_value, read_node, write_text_element, GmlElement};
use crate::error::{GeoUnitsError, ParseError, ParseFailure};
use crate::quantity::{Quantity, Unit};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

impl<U: Unit> GmlElement for Quantity<U> {
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError> {
        write_text_element(writer, "Units", self.unit().name())?;
        write_text_element(writer, "Value", &format_number(self.value()))
    }

    /// Reads the `<Units>` and `<Value>` elements, in any order.
    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError> {
        let mut unit = None;
        let mut value = None;

        while unit.is_none() || value.is_none() {
            let node = read_node(reader)?;
            if node.is("Units") && unit.is_none() {
                let name = node.text();
                let parsed = U::from_name(name).ok_or_else(|| {
                    ParseError::new(
                        U::KIND,
                        name,
                        ParseFailure::InvalidUnitPortion {
                            token: name.to_string(),
                        },
                    )
                })?;
                unit = Some(parsed);
            } else if node.is("Value") && value.is_none() {
                value = Some(parse_value(U::KIND, node.text())?);
            } else {
                return Err(node.unexpected("<Units> and <Value>"));
            }
        }

        match (value, unit) {
            (Some(value), Some(unit)) => Ok(Quantity::new(value, unit)),
            _ => Err(GeoUnitsError::Gml(format!("incomplete {}", U::KIND))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{Distance, DistanceUnit, Speed, SpeedUnit};
    use assert_matches::assert_matches;

    #[test]
    fn write() {
        let gml = Distance::new(5.5, DistanceUnit::NauticalMiles).to_gml_string().unwrap();
        assert_eq!(gml, "<Units>NauticalMiles</Units><Value>5.5</Value>");
    }

    #[test]
    fn round_trip() {
        for unit in SpeedUnit::ALL {
            let speed = Speed::new(1.0 / 7.0, *unit);
            let read = Speed::from_gml_str(&speed.to_gml_string().unwrap()).unwrap();
            assert_eq!(read.unit(), *unit);
            assert_eq!(read.value(), speed.value());
        }
    }

    #[test]
    fn read_in_any_order() {
        let distance = Distance::from_gml_str("<Value>12</Value><Units>feet</Units>").unwrap();
        assert_eq!(distance.unit(), DistanceUnit::Feet);
        assert_eq!(distance.value(), 12.0);
    }

    #[test]
    fn read_errors() {
        assert_matches!(
            Distance::from_gml_str("<Units>Parsecs</Units><Value>1</Value>"),
            Err(GeoUnitsError::Parse(err)) if err.kind() == "Distance"
        );
        assert_matches!(
            Distance::from_gml_str("<Units>Meters</Units>"),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            Distance::from_gml_str("<Units>Meters</Units><Units>Feet</Units>"),
            Err(GeoUnitsError::Gml(_))
        );
    }
}
