//! OSM-style XML payload parser.
//!
//! Road-network payloads arrive as the XML tree produced by OpenStreetMap
//! exports and Overpass-compatible endpoints: `<node>` elements with
//! positions, `<way>` elements referencing nodes through `<nd ref>` children
//! and carrying `<tag k v>` children.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::surface::classifier::{RoadNetwork, RoadNode, RoadTag, RoadWay};

/// Road-network payload errors.
#[derive(Debug, Error)]
pub enum RoadDataError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid {attribute} attribute on <{element}>: {value}")]
    InvalidAttribute { element: &'static str, attribute: &'static str, value: String },

    #[error("missing {attribute} attribute on <{element}>")]
    MissingAttribute { element: &'static str, attribute: &'static str },
}

/// Parse an OSM-style XML document into a [`RoadNetwork`].
///
/// Elements other than `node`, `way`, `nd` and `tag` are skipped; `nd` and
/// `tag` elements outside a `way` are ignored.
pub fn parse_road_network(content: &str) -> Result<RoadNetwork, RoadDataError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut network = RoadNetwork::default();
    let mut current_way: Option<RoadWay> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"node" => network.nodes.push(parse_node(e)?),
                b"way" => current_way = Some(RoadWay::default()),
                b"nd" => {
                    if let Some(way) = current_way.as_mut() {
                        way.node_refs.push(parse_node_ref(e)?);
                    }
                }
                b"tag" => {
                    if let Some(way) = current_way.as_mut() {
                        way.tags.push(parse_tag(e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"node" => network.nodes.push(parse_node(e)?),
                b"way" => network.ways.push(RoadWay::default()),
                b"nd" => {
                    if let Some(way) = current_way.as_mut() {
                        way.node_refs.push(parse_node_ref(e)?);
                    }
                }
                b"tag" => {
                    if let Some(way) = current_way.as_mut() {
                        way.tags.push(parse_tag(e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"way" {
                    if let Some(way) = current_way.take() {
                        network.ways.push(way);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RoadDataError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(network)
}

fn parse_node(e: &BytesStart) -> Result<RoadNode, RoadDataError> {
    let mut id = None;
    let mut lat = None;
    let mut lng = None;
    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        match attr.key.as_ref() {
            b"id" => id = Some(parse_number::<i64>("node", "id", &value)?),
            b"lat" => lat = Some(parse_number::<f64>("node", "lat", &value)?),
            b"lon" => lng = Some(parse_number::<f64>("node", "lon", &value)?),
            _ => {}
        }
    }
    Ok(RoadNode {
        id: id.ok_or(RoadDataError::MissingAttribute { element: "node", attribute: "id" })?,
        lat: lat.ok_or(RoadDataError::MissingAttribute { element: "node", attribute: "lat" })?,
        lng: lng.ok_or(RoadDataError::MissingAttribute { element: "node", attribute: "lon" })?,
    })
}

fn parse_node_ref(e: &BytesStart) -> Result<i64, RoadDataError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"ref" {
            let value = String::from_utf8_lossy(&attr.value);
            return parse_number::<i64>("nd", "ref", &value);
        }
    }
    Err(RoadDataError::MissingAttribute { element: "nd", attribute: "ref" })
}

fn parse_tag(e: &BytesStart) -> Result<RoadTag, RoadDataError> {
    let mut key = None;
    let mut value = None;
    for attr in e.attributes().flatten() {
        let text = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"k" => key = Some(text),
            b"v" => value = Some(text),
            _ => {}
        }
    }
    Ok(RoadTag {
        key: key.ok_or(RoadDataError::MissingAttribute { element: "tag", attribute: "k" })?,
        value: value.ok_or(RoadDataError::MissingAttribute { element: "tag", attribute: "v" })?,
    })
}

fn parse_number<T: std::str::FromStr>(
    element: &'static str,
    attribute: &'static str,
    value: &str,
) -> Result<T, RoadDataError> {
    value.parse::<T>().map_err(|_| RoadDataError::InvalidAttribute {
        element,
        attribute,
        value: value.to_string(),
    })
}
