//! Reading and writing the markup documents.
//!
//! Two documents share the `<field>` root element:
//!
//! - the transport graph read by [`read_network`]:
//!   `<field width height><node id x y/>...<edge from to/>...</field>`
//! - the trace written by [`write_trace`] and read back by [`read_trace`]:
//!   `<field width height generationCount><gen n><node id x y/>...<edge id from to/>...</gen>...`

use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::debug;

use crate::config::COORDINATE_LIMIT;
use crate::error::{SimError, SimResult};
use crate::graph::TransportGraph;
use crate::trace::{EdgeRecord, Generation, NodeRecord, Trace};
use crate::types::Position;

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut e = BytesStart::new(name);
    for &attr in attrs {
        e.push_attribute(attr);
    }
    e
}

fn text_attr(e: &BytesStart, name: &str) -> SimResult<String> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(attr.unescape_value()?.into_owned()),
        None => Err(SimError::MissingAttribute {
            element: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attribute: name.to_owned(),
        }),
    }
}

fn int_attr<T>(e: &BytesStart, name: &str) -> SimResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = text_attr(e, name)?;
    value
        .trim()
        .parse()
        .map_err(|source| SimError::InvalidNumber {
            attribute: name.to_owned(),
            value,
            source,
        })
}

/// Reads a waypoint coordinate, rejecting values beyond [`COORDINATE_LIMIT`].
fn coord_attr(e: &BytesStart, name: &str) -> SimResult<i64> {
    let value: i64 = int_attr(e, name)?;
    if value.unsigned_abs() > COORDINATE_LIMIT.unsigned_abs() {
        return Err(SimError::CoordinateOutOfRange {
            attribute: name.to_owned(),
            value,
        });
    }
    Ok(value)
}

fn reader<R: BufRead>(input: R) -> Reader<R> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);
    reader
}

/// Skips the prolog and returns the root element, which must be `name`.
fn read_root<R: BufRead>(
    reader: &mut Reader<R>,
    buf: &mut Vec<u8>,
    name: &'static str,
) -> SimResult<BytesStart<'static>> {
    loop {
        buf.clear();
        match reader.read_event_into(buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == name.as_bytes() => {
                return Ok(e.into_owned());
            }
            Event::Start(_) | Event::Empty(_) | Event::Eof => {
                return Err(SimError::MissingElement(name));
            }
            _ => {}
        }
    }
}

/// Loads a transport graph.
///
/// `node` and `edge` elements are picked up at any depth below the root.
/// Edges are attached after all waypoints are known; an edge naming an
/// unknown waypoint is dropped.
///
/// ### Errors
/// Malformed markup, a root other than `field`, missing or non-integer
/// attributes, and waypoint coordinates beyond [`COORDINATE_LIMIT`].
pub fn read_network<R: BufRead>(input: R) -> SimResult<TransportGraph> {
    let mut reader = reader(input);
    let mut buf = Vec::new();

    let root = read_root(&mut reader, &mut buf, "field")?;
    let mut graph = TransportGraph::new(int_attr(&root, "width")?, int_attr(&root, "height")?);
    let mut edges = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"node" => {
                    let pos = Position::new(coord_attr(&e, "x")?, coord_attr(&e, "y")?);
                    graph.add_waypoint(text_attr(&e, "id")?, pos);
                }
                b"edge" => edges.push((text_attr(&e, "from")?, text_attr(&e, "to")?)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    for (from, to) in edges {
        if !graph.connect(&from, &to) {
            debug!(%from, %to, "dropping edge with unknown endpoint");
        }
    }
    Ok(graph)
}

/// Writes `trace` as an indented document with an XML declaration and
/// flushes `out`.
pub fn write_trace<W: Write>(trace: &Trace, out: W) -> SimResult<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    writer.write_event(Event::Start(element(
        "field",
        &[
            ("width", trace.width.to_string().as_str()),
            ("height", trace.height.to_string().as_str()),
            ("generationCount", trace.generation_count.to_string().as_str()),
        ],
    )))?;

    for generation in &trace.generations {
        let n = generation.n.to_string();
        writer.write_event(Event::Start(element("gen", &[("n", n.as_str())])))?;
        for node in &generation.nodes {
            writer.write_event(Event::Empty(element(
                "node",
                &[
                    ("id", node.id.as_str()),
                    ("x", node.x.to_string().as_str()),
                    ("y", node.y.to_string().as_str()),
                ],
            )))?;
        }
        for edge in &generation.edges {
            writer.write_event(Event::Empty(element(
                "edge",
                &[
                    ("id", edge.id.as_str()),
                    ("from", edge.from.as_str()),
                    ("to", edge.to.as_str()),
                ],
            )))?;
        }
        writer.write_event(Event::End(BytesEnd::new("gen")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("field")))?;
    writer.into_inner().flush()?;
    Ok(())
}

/// Parses a trace document written by [`write_trace`].
///
/// `node` and `edge` elements outside a `gen` element are ignored.
pub fn read_trace<R: BufRead>(input: R) -> SimResult<Trace> {
    let mut reader = reader(input);
    let mut buf = Vec::new();

    let root = read_root(&mut reader, &mut buf, "field")?;
    let mut trace = Trace::new(
        int_attr(&root, "width")?,
        int_attr(&root, "height")?,
        int_attr(&root, "generationCount")?,
    );

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"gen" => trace.generations.push(Generation::new(int_attr(&e, "n")?)),
                b"node" => {
                    if let Some(current) = trace.generations.last_mut() {
                        current.nodes.push(NodeRecord {
                            id: text_attr(&e, "id")?,
                            x: int_attr(&e, "x")?,
                            y: int_attr(&e, "y")?,
                        });
                    }
                }
                b"edge" => {
                    if let Some(current) = trace.generations.last_mut() {
                        current.edges.push(EdgeRecord {
                            id: text_attr(&e, "id")?,
                            from: text_attr(&e, "from")?,
                            to: text_attr(&e, "to")?,
                        });
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(trace)
}
