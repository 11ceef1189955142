//! Points of interest derived from named OpenStreetMap nodes.

use geo::Coord;

use crate::{RawNode, TileKey};

/// A named location worth showing on a map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude` and keep the
/// full precision of the input. With the `serde` feature the record
/// serializes as `{"id", "lat", "lon", "name", "type", "address"}`.
///
/// # Examples
/// ```
/// use poi_tiles_core::{PointOfInterest, RawNode, Tags};
///
/// let node = RawNode::new(
///     "1",
///     40.74,
///     -73.98,
///     Tags::from([("name", "Central Park"), ("tourism", "attraction")]),
/// );
/// let poi = PointOfInterest::from_node(&node).expect("named node");
/// assert_eq!(poi.kind, "attraction");
/// assert_eq!(poi.tile_key().as_str(), "40.7_-74.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PoiRecord", into = "PoiRecord")
)]
pub struct PointOfInterest {
    /// Identifier text copied from the source node.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Display name; never empty.
    pub name: String,
    /// Value of `tourism`, else `historic`, else empty.
    pub kind: String,
    /// Value of `addr:full`, else `addr:street`, else empty.
    pub address: String,
}

impl PointOfInterest {
    /// Build a point of interest from a raw node.
    ///
    /// Returns `None` when the node has no `name` tag or the name is empty.
    #[must_use]
    pub fn from_node(node: &RawNode) -> Option<Self> {
        let name = node.tags.name()?;
        Some(Self {
            id: node.id.clone(),
            location: node.location,
            name: name.to_owned(),
            kind: node.tags.kind().to_owned(),
            address: node.tags.address().to_owned(),
        })
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

    /// Key of the tile this point belongs to.
    #[must_use]
    pub fn tile_key(&self) -> TileKey {
        TileKey::from_location(self.location)
    }
}

/// Wire shape of a point of interest inside a tile file.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PoiRecord {
    id: String,
    lat: f64,
    lon: f64,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    address: String,
}

#[cfg(feature = "serde")]
impl From<PointOfInterest> for PoiRecord {
    fn from(poi: PointOfInterest) -> Self {
        Self {
            id: poi.id,
            lat: poi.location.y,
            lon: poi.location.x,
            name: poi.name,
            kind: poi.kind,
            address: poi.address,
        }
    }
}

#[cfg(feature = "serde")]
impl From<PoiRecord> for PointOfInterest {
    fn from(record: PoiRecord) -> Self {
        Self {
            id: record.id,
            location: Coord {
                x: record.lon,
                y: record.lat,
            },
            name: record.name,
            kind: record.kind,
            address: record.address,
        }
    }
}
