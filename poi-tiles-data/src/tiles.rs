//! In-memory grouping of points of interest by tile.

use std::collections::BTreeMap;

use geo::{Coord, Rect};
use poi_tiles_core::{PointOfInterest, RawNode, TileKey};

/// Points of interest grouped by the tile that contains them.
///
/// Tiles come into existence when the first point is assigned, so an empty
/// tile is never stored. Iteration follows key order.
///
/// # Examples
/// ```
/// use poi_tiles_core::{RawNode, Tags, TileKey};
/// use poi_tiles_data::TileSet;
///
/// let nodes = [
///     RawNode::new("1", 40.74, -73.98, Tags::from([("name", "Central Park")])),
///     RawNode::new("2", 40.71, -74.01, Tags::from([("name", "Battery Park")])),
///     RawNode::new("3", 40.71, -74.01, Tags::new()),
/// ];
/// let tiles = TileSet::from_nodes(&nodes);
/// assert_eq!(tiles.len(), 1);
/// assert_eq!(tiles.poi_count(), 2);
/// assert!(tiles.get(&TileKey::from_coordinates(40.7, -74.0)).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileSet {
    tiles: BTreeMap<TileKey, Vec<PointOfInterest>>,
}

impl TileSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiles: BTreeMap::new(),
        }
    }

    /// Filter `nodes` down to points of interest and group them by tile.
    #[must_use]
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a RawNode>,
    {
        nodes
            .into_iter()
            .filter_map(PointOfInterest::from_node)
            .collect()
    }

    /// Assign a point of interest to its tile.
    pub fn insert(&mut self, poi: PointOfInterest) {
        self.tiles.entry(poi.tile_key()).or_default().push(poi);
    }

    /// Number of populated tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of points across all tiles.
    #[must_use]
    pub fn poi_count(&self) -> usize {
        self.tiles.values().map(Vec::len).sum()
    }

    /// Points assigned to `key`, if that tile is populated.
    #[must_use]
    pub fn get(&self, key: &TileKey) -> Option<&[PointOfInterest]> {
        self.tiles.get(key).map(Vec::as_slice)
    }

    /// Iterate over populated tiles in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TileKey, &[PointOfInterest])> {
        self.tiles.iter().map(|(key, pois)| (key, pois.as_slice()))
    }

    /// Bounding box of every stored point, `x = longitude`, `y = latitude`.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.tiles
            .values()
            .flatten()
            .map(|poi| poi.location)
            .fold(None, |bounds, location| Some(include(bounds, location)))
    }
}

impl FromIterator<PointOfInterest> for TileSet {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        let mut tiles = Self::new();
        for poi in iter {
            tiles.insert(poi);
        }
        tiles
    }
}

fn include(bounds: Option<Rect<f64>>, location: Coord<f64>) -> Rect<f64> {
    match bounds {
        Some(existing) => Rect::new(
            Coord {
                x: existing.min().x.min(location.x),
                y: existing.min().y.min(location.y),
            },
            Coord {
                x: existing.max().x.max(location.x),
                y: existing.max().y.max(location.y),
            },
        ),
        None => Rect::new(location, location),
    }
}
