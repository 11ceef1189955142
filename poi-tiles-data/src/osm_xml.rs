//! Loader for OpenStreetMap XML exports.
//!
//! Reads `<node>` elements that sit directly under the document root along
//! with their `<tag k=".." v=".."/>` children. Ways, relations and any other
//! elements are ignored. The whole document is parsed before a single node is
//! returned, and the first problem aborts the load.

use std::io::Read;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

use camino::{Utf8Path, Utf8PathBuf};
use poi_tiles_core::{RawNode, Tags};
use poi_tiles_fs::open_utf8_file;
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

const NODE_ELEMENT: &str = "node";
const TAG_ELEMENT: &str = "tag";

/// Errors returned when loading an OSM XML file from disk.
#[derive(Debug, Error)]
pub enum OsmXmlError {
    /// The input file could not be opened.
    #[error("failed to open OSM XML file at {path}")]
    Open {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the input file failed part-way.
    #[error("failed to read OSM XML file at {path}")]
    Read {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The input is not UTF-8 text.
    #[error("OSM XML file at {path} is not valid UTF-8")]
    Encoding {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from the UTF-8 decoder.
        #[source]
        source: FromUtf8Error,
    },
    /// The document content is invalid.
    #[error("failed to parse OSM XML file at {path}")]
    Parse {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Description of the offending content.
        #[source]
        source: OsmXmlParseError,
    },
}

/// Errors raised while interpreting OSM XML text.
#[derive(Debug, Error)]
pub enum OsmXmlParseError {
    /// The text is not well-formed XML.
    #[error("malformed XML")]
    Malformed(#[from] roxmltree::Error),
    /// A `node` or `tag` element lacks a required attribute.
    #[error("<{element}> at line {line} is missing the `{attribute}` attribute")]
    MissingAttribute {
        /// Element name.
        element: &'static str,
        /// Attribute name.
        attribute: &'static str,
        /// One-based line of the element start.
        line: u32,
    },
    /// A coordinate attribute does not hold a number.
    #[error("<node> at line {line} has an invalid `{attribute}` value {value:?}")]
    InvalidCoordinate {
        /// One-based line of the element start.
        line: u32,
        /// Attribute name (`lat` or `lon`).
        attribute: &'static str,
        /// Attribute text as found in the document.
        value: String,
        /// Source error from the float parser.
        #[source]
        source: ParseFloatError,
    },
    /// A named node's coordinate is NaN or infinite and cannot be placed on the grid.
    #[error("<node> at line {line} has a non-finite `{attribute}` value {value:?}")]
    NonFiniteCoordinate {
        /// One-based line of the element start.
        line: u32,
        /// Attribute name (`lat` or `lon`).
        attribute: &'static str,
        /// Attribute text as found in the document.
        value: String,
    },
}

/// Load every root-level node from an OSM XML file, in document order.
///
/// # Errors
/// Returns [`OsmXmlError`] when the file cannot be read, is not UTF-8, is not
/// well-formed XML, or contains a node with missing or unusable attributes.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use poi_tiles_data::load_osm_xml;
///
/// # fn main() -> Result<(), poi_tiles_data::OsmXmlError> {
/// let nodes = load_osm_xml(Utf8Path::new("manhattan.osm"))?;
/// println!("Loaded {} nodes", nodes.len());
/// # Ok(())
/// # }
/// ```
pub fn load_osm_xml(path: &Utf8Path) -> Result<Vec<RawNode>, OsmXmlError> {
    let mut file = open_utf8_file(path).map_err(|source| OsmXmlError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| OsmXmlError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let text = String::from_utf8(bytes).map_err(|source| OsmXmlError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    parse_osm_xml(&text).map_err(|source| OsmXmlError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse OSM XML text into raw nodes, in document order.
///
/// # Errors
/// Returns [`OsmXmlParseError`] for malformed XML and for nodes or tags with
/// missing or unusable attributes.
///
/// # Examples
/// ```
/// use poi_tiles_data::parse_osm_xml;
///
/// let nodes = parse_osm_xml(
///     r#"<osm><node id="1" lat="40.74" lon="-73.98"><tag k="name" v="Central Park"/></node></osm>"#,
/// )
/// .expect("valid document");
/// assert_eq!(nodes[0].tags.name(), Some("Central Park"));
/// ```
pub fn parse_osm_xml(text: &str) -> Result<Vec<RawNode>, OsmXmlParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;
    document
        .root_element()
        .children()
        .filter(|child| child.has_tag_name(NODE_ELEMENT))
        .map(|element| read_node(&document, element))
        .collect()
}

fn read_node(document: &Document<'_>, element: Node<'_, '_>) -> Result<RawNode, OsmXmlParseError> {
    let lat = coordinate_attribute(document, element, "lat")?;
    let lon = coordinate_attribute(document, element, "lon")?;
    let tags = read_tags(document, element)?;
    if tags.name().is_none() {
        // Unnamed nodes never become points; neither the id nor finiteness is required.
        let id = element.attribute("id").unwrap_or_default();
        return Ok(RawNode::new(id, lat.value, lon.value, tags));
    }
    lat.ensure_finite(document, element)?;
    lon.ensure_finite(document, element)?;
    let id = required_attribute(document, element, NODE_ELEMENT, "id")?;
    Ok(RawNode::new(id, lat.value, lon.value, tags))
}

fn read_tags(document: &Document<'_>, element: Node<'_, '_>) -> Result<Tags, OsmXmlParseError> {
    let mut tags = Tags::new();
    for tag in element
        .children()
        .filter(|child| child.has_tag_name(TAG_ELEMENT))
    {
        let key = required_attribute(document, tag, TAG_ELEMENT, "k")?;
        let value = required_attribute(document, tag, TAG_ELEMENT, "v")?;
        tags.insert(key, value);
    }
    Ok(tags)
}

/// A parsed coordinate together with the text it came from.
struct Coordinate<'a> {
    attribute: &'static str,
    raw: &'a str,
    value: f64,
}

impl Coordinate<'_> {
    fn ensure_finite(
        &self,
        document: &Document<'_>,
        element: Node<'_, '_>,
    ) -> Result<(), OsmXmlParseError> {
        if self.value.is_finite() {
            return Ok(());
        }
        Err(OsmXmlParseError::NonFiniteCoordinate {
            line: line_of(document, element),
            attribute: self.attribute,
            value: self.raw.to_owned(),
        })
    }
}

fn coordinate_attribute<'a>(
    document: &Document<'_>,
    element: Node<'a, '_>,
    attribute: &'static str,
) -> Result<Coordinate<'a>, OsmXmlParseError> {
    let raw = required_attribute(document, element, NODE_ELEMENT, attribute)?;
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| OsmXmlParseError::InvalidCoordinate {
            line: line_of(document, element),
            attribute,
            value: raw.to_owned(),
            source,
        })?;
    Ok(Coordinate {
        attribute,
        raw,
        value,
    })
}

fn required_attribute<'a>(
    document: &Document<'_>,
    element: Node<'a, '_>,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<&'a str, OsmXmlParseError> {
    element
        .attribute(attribute)
        .ok_or_else(|| OsmXmlParseError::MissingAttribute {
            element: element_name,
            attribute,
            line: line_of(document, element),
        })
}

fn line_of(document: &Document<'_>, element: Node<'_, '_>) -> u32 {
    document.text_pos_at(element.range().start).row
}
