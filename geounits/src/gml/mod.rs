//! GML fragments for the value types.
//!
//! Each type is written as a fragment into a caller-owned [`Writer`] and read back from a
//! caller-owned [`Reader`], which is left positioned right after the fragment. Readers also
//! accept the legacy forms produced by older GML writers:
//!
//! | Type | Written as | Also read from |
//! |------|------------|----------------|
//! | [`Angle`](crate::Angle) | `<angle uom="degrees">12.5</angle>` | |
//! | [`Position`](crate::Position) | `<pos>lon lat</pos>` | `<coord><X/><Y/></coord>` |
//! | [`Position3d`](crate::Position3d) | `<pos>lon lat alt</pos>` | `<coord><X/><Y/><Z/></coord>` |
//! | [`Quantity`](crate::Quantity) | `<Units>Meters</Units><Value>5</Value>` | |
//! | [`GeographicRectangle`](crate::GeographicRectangle) | `<envelope>` | `<boundedBy>`, `<Box>` |

mod angle;
mod position;
mod quantity;
mod rectangle;

use crate::error::{GeoUnitsError, ParseError, ParseFailure};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Value that can be stored as a GML fragment.
pub trait GmlElement: Sized {
    /// Writes the fragment.
    fn write_gml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GeoUnitsError>;

    /// Reads the fragment, skipping anything before its first element.
    fn read_gml<R: BufRead>(reader: &mut Reader<R>) -> Result<Self, GeoUnitsError>;

    /// Writes the fragment into a string.
    fn to_gml_string(&self) -> Result<String, GeoUnitsError> {
        let mut writer = Writer::new(Vec::new());
        self.write_gml(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|err| GeoUnitsError::Gml(err.to_string()))
    }

    /// Reads the fragment from a string.
    fn from_gml_str(gml: &str) -> Result<Self, GeoUnitsError> {
        let mut reader = Reader::from_str(gml);
        reader.config_mut().trim_text(true);
        Self::read_gml(&mut reader)
    }
}

/// Element read into memory: local name, attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) children: Vec<Node>,
}

impl Node {
    fn from_start(start: &BytesStart) -> Result<Self, GeoUnitsError> {
        let mut attributes = vec![];
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes,
            ..Default::default()
        })
    }

    pub(crate) fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub(crate) fn text(&self) -> &str {
        self.text.trim()
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.is(name))
    }

    pub(crate) fn required_child(&self, name: &str) -> Result<&Node, GeoUnitsError> {
        self.child(name).ok_or_else(|| {
            GeoUnitsError::Gml(format!("<{}> has no <{name}> element", self.name))
        })
    }

    pub(crate) fn unexpected(&self, expected: &str) -> GeoUnitsError {
        GeoUnitsError::Gml(format!("expected {expected}, found <{}>", self.name))
    }
}

/// Reads the next element with all its content.
pub(crate) fn read_node<R: BufRead>(reader: &mut Reader<R>) -> Result<Node, GeoUnitsError> {
    let mut buf = vec![];
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let node = Node::from_start(&start)?;
                return read_content(reader, node);
            }
            Event::Empty(start) => return Node::from_start(&start),
            Event::End(end) => {
                return Err(GeoUnitsError::Gml(format!(
                    "unexpected closing tag </{}>",
                    String::from_utf8_lossy(end.local_name().as_ref())
                )))
            }
            Event::Eof => return Err(GeoUnitsError::Gml("unexpected end of input".into())),
            event => log::trace!("skipping {event:?} before gml element"),
        }
        buf.clear();
    }
}

fn read_content<R: BufRead>(reader: &mut Reader<R>, mut node: Node) -> Result<Node, GeoUnitsError> {
    let mut buf = vec![];
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let child = Node::from_start(&start)?;
                node.children.push(read_content(reader, child)?);
            }
            Event::Empty(start) => node.children.push(Node::from_start(&start)?),
            Event::Text(text) => node.text.push_str(&text.unescape()?),
            Event::CData(data) => node.text.push_str(&String::from_utf8_lossy(&data)),
            Event::End(_) => return Ok(node),
            Event::Eof => {
                return Err(GeoUnitsError::Gml(format!(
                    "<{}> is not closed",
                    node.name
                )))
            }
            _ => {}
        }
        buf.clear();
    }
}

pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), GeoUnitsError> {
    write_text_element_with(writer, BytesStart::new(name), text)
}

pub(crate) fn write_text_element_with<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart,
    text: &str,
) -> Result<(), GeoUnitsError> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

pub(crate) fn write_parent<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: impl FnOnce(&mut Writer<W>) -> Result<(), GeoUnitsError>,
) -> Result<(), GeoUnitsError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    content(writer)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Parses a number written by [`format_number`].
pub(crate) fn parse_value(kind: &'static str, token: &str) -> Result<f64, GeoUnitsError> {
    token.parse::<f64>().map_err(|source| {
        let failure = ParseFailure::InvalidNumericPortion {
            token: token.to_string(),
            source,
        };
        ParseError::new(kind, token, failure).into()
    })
}

/// Formats a number so that parsing it back gives the same value.
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn reads_nested_nodes() {
        let mut reader = Reader::from_str(
            r#"<?xml version="1.0"?><!-- c --><a x="1"><b>text</b><c/> tail</a><d/>"#,
        );
        let node = read_node(&mut reader).unwrap();
        assert!(node.is("A"));
        assert_eq!(node.attribute("x"), Some("1"));
        assert_eq!(node.text(), "tail");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.required_child("b").unwrap().text(), "text");
        assert!(node.child("c").is_some());

        let next = read_node(&mut reader).unwrap();
        assert_eq!(next.name, "d");
        assert_matches!(read_node(&mut reader), Err(GeoUnitsError::Gml(_)));
    }

    #[test]
    fn unclosed_element() {
        let mut reader = Reader::from_str("<a><b>1</b>");
        assert!(read_node(&mut reader).is_err());
    }

    #[test]
    fn writes_elements() {
        let mut writer = Writer::new(Vec::new());
        write_parent(&mut writer, "a", |writer| {
            write_text_element(writer, "b", "1 < 2")
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "<a><b>1 &lt; 2</b></a>"
        );
    }

    #[test]
    fn number_round_trip() {
        for value in [0.1, 1.0 / 3.0, -123.456_789_012_345_67, 6_371_008.8, 1e-300] {
            assert_eq!(format_number(value).parse::<f64>().unwrap(), value);
        }
    }
}
