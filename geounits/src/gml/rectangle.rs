use super::position::Coordinates;
use super::{read_node, write_parent, write_text_element, GmlElement, Node};
use crate::error::GeoUnitsError;
use crate::geo::GeographicRectangle;
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

const KIND: &str = "GeographicRectangle";

fn from_node(node: &Node) -> Result<GeographicRectangle, GeoUnitsError> {
    if node.is("envelope") {
        let lower = Coordinates::parse(KIND, node.required_child("lowerCorner")?.text())?;
        let upper = Coordinates::parse(KIND, node.required_child("upperCorner")?.text())?;
        return Ok(GeographicRectangle::from_corners(
            lower.position(),
            upper.position(),
        ));
    }

    if node.is("boundedBy") {
        log::debug!("reading legacy <boundedBy> element as {KIND}");
        let inner = node
            .children
            .first()
            .ok_or_else(|| GeoUnitsError::Gml("<boundedBy> is empty".into()))?;
        return from_node(inner);
    }

    if node.is("Box") {
        log::debug!("reading legacy <Box> element as {KIND}");
        let corners = node
            .children
            .iter()
            .map(|child| Coordinates::read(KIND, child))
            .collect::<Result<Vec<_>, _>>()?;
        return match corners.as_slice() {
            [first, second] => Ok(GeographicRectangle::from_corners(
                first.position(),
                second.position(),
            )),
            _ => Err(GeoUnitsError::Gml(format!(
                "<Box> must have 2 corners, found {}",
                corners.len()
            ))),
        };
    }

    Err(node.unexpected("<envelope>, <boundedBy> or <Box>"))
}

impl GmlElement for GeographicRectangle {
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError> {
        write_parent(writer, "envelope", |writer| {
            write_text_element(
                writer,
                "lowerCorner",
                &Coordinates::of(&self.southwest()).to_text(),
            )?;
            write_text_element(
                writer,
                "upperCorner",
                &Coordinates::of(&self.northeast()).to_text(),
            )
        })
    }

    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError> {
        from_node(&read_node(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use assert_matches::assert_matches;

    fn rectangle() -> GeographicRectangle {
        GeographicRectangle::from_corners(latlon!(39.0, -105.0), latlon!(37.0, -100.5))
    }

    #[test]
    fn write() {
        assert_eq!(
            rectangle().to_gml_string().unwrap(),
            concat!(
                "<envelope><lowerCorner>-105 37</lowerCorner>",
                "<upperCorner>-100.5 39</upperCorner></envelope>"
            )
        );
    }

    #[test]
    fn round_trip() {
        let read = GeographicRectangle::from_gml_str(&rectangle().to_gml_string().unwrap());
        assert_eq!(read.unwrap(), rectangle());
    }

    #[test]
    fn read_legacy_forms() {
        let gml = r#"
            <boundedBy>
                <boundedBy>
                    <Box>
                        <pos>-100.5 37</pos>
                        <coord><X>-105</X><Y>39</Y></coord>
                    </Box>
                </boundedBy>
            </boundedBy>"#;
        assert_eq!(GeographicRectangle::from_gml_str(gml).unwrap(), rectangle());

        let gml = "<boundedBy><envelope><lowerCorner>-105 37</lowerCorner>\
                   <upperCorner>-100.5 39</upperCorner></envelope></boundedBy>";
        assert_eq!(GeographicRectangle::from_gml_str(gml).unwrap(), rectangle());
    }

    #[test]
    fn read_errors() {
        assert_matches!(
            GeographicRectangle::from_gml_str(
                "<envelope><lowerCorner>1 2</lowerCorner></envelope>"
            ),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            GeographicRectangle::from_gml_str("<Box><pos>1 2</pos></Box>"),
            Err(GeoUnitsError::Gml(_))
        );
        assert_matches!(
            GeographicRectangle::from_gml_str("<boundedBy/>"),
            Err(GeoUnitsError::Gml(_))
        );
    }
}
