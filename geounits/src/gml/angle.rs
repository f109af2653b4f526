use super::{format_number, parse_value, read_node, write_text_element_with, GmlElement};
use crate::angle::Angle;
use crate::error::GeoUnitsError;
use quick_xml::events::BytesStart;
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

const UNIT_OF_MEASURE: &str = "degrees";

impl GmlElement for Angle {
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError> {
        let start = BytesStart::new("angle").with_attributes([("uom", UNIT_OF_MEASURE)]);
        write_text_element_with(writer, start, &format_number(self.decimal_degrees()))
    }

    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError> {
        let node = read_node(reader)?;
        if !node.is("angle") {
            return Err(node.unexpected("<angle>"));
        }

        if let Some(uom) = node.attribute("uom") {
            if !uom.eq_ignore_ascii_case(UNIT_OF_MEASURE) {
                return Err(GeoUnitsError::Gml(format!(
                    "unsupported angle unit of measure {uom:?}"
                )));
            }
        }

        parse_value("Angle", node.text()).map(Angle::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn write() {
        let gml = Angle::new(123.456_78).to_gml_string().unwrap();
        assert_eq!(gml, r#"<angle uom="degrees">123.45678</angle>"#);
    }

    #[test]
    fn round_trip() {
        for degrees in [0.0, -0.1, 1.0 / 3.0, 359.999_999_999] {
            let angle = Angle::new(degrees);
            let read = Angle::from_gml_str(&angle.to_gml_string().unwrap()).unwrap();
            assert_eq!(read, angle);
        }
    }

    #[test]
    fn read_without_uom() {
        let angle = Angle::from_gml_str("<angle> 12.5 </angle>").unwrap();
        assert_eq!(angle.decimal_degrees(), 12.5);
    }

    #[test]
    fn read_errors() {
        assert_matches!(
            Angle::from_gml_str(r#"<angle uom="radians">1</angle>"#),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            Angle::from_gml_str("<pos>1 2</pos>"),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            Angle::from_gml_str("<angle>north</angle>"),
            Err(GeoUnitsError::Parse(err)) if err.kind() == "Angle"
        );
    }
}
