//! Raw OpenStreetMap nodes as read from an export.

use geo::Coord;

use crate::Tags;

/// A node read from an OpenStreetMap export, before filtering.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// identifier is kept as the verbatim attribute text so large or unusual ids
/// survive untouched.
///
/// # Examples
/// ```
/// use poi_tiles_core::{RawNode, Tags};
///
/// let node = RawNode::new("42", 51.5, -0.12, Tags::from([("name", "Here")]));
/// assert_eq!(node.lat(), 51.5);
/// assert_eq!(node.lon(), -0.12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    /// Identifier text copied from the `id` attribute, empty for an unnamed
    /// node that has none.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Tags attached to the node.
    pub tags: Tags,
}

impl RawNode {
    /// Construct a node from latitude/longitude order, as OSM writes them.
    #[must_use]
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, tags: Tags) -> Self {
        Self {
            id: id.into(),
            location: Coord { x: lon, y: lat },
            tags,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.location.x
    }
}
