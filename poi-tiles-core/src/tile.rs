//! Tile keys for the 0.1-degree grid that partitions points of interest.
//!
//! A coordinate is scaled by ten, rounded half-to-even, and scaled back. The
//! rounded pair is rendered with exactly one fractional digit and joined with
//! an underscore, e.g. `40.7_-74.0`. Consumers locate tile files by this name,
//! so the rounding rule and the formatting are part of the file format.

use std::fmt;

use geo::Coord;

/// Tiles per degree along each axis; a tile spans `1 / TILE_SCALE` degrees.
const TILE_SCALE: f64 = 10.0;

/// Extension used for tile files.
pub const TILE_FILE_EXTENSION: &str = "json";

/// Identifier of a tile, `"<tile_lat>_<tile_lon>"`.
///
/// # Examples
/// ```
/// use poi_tiles_core::TileKey;
///
/// let key = TileKey::from_coordinates(40.74, -73.98);
/// assert_eq!(key.as_str(), "40.7_-74.0");
/// assert_eq!(key.file_name(), "40.7_-74.0.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKey(String);

impl TileKey {
    /// Compute the key of the tile containing `(lat, lon)`.
    #[must_use]
    pub fn from_coordinates(lat: f64, lon: f64) -> Self {
        Self(format!(
            "{:.1}_{:.1}",
            round_to_tile(lat),
            round_to_tile(lon)
        ))
    }

    /// Compute the key for a WGS84 coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn from_location(location: Coord<f64>) -> Self {
        Self::from_coordinates(location.y, location.x)
    }

    /// The key text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// File name of the tile artefact, `<key>.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{TILE_FILE_EXTENSION}", self.0)
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TileKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Round a coordinate to the tile grid.
///
/// Ties go to the even neighbour of the scaled value, so `0.25` rounds to
/// `0.2` and `0.35` (which scales to exactly `3.5`) rounds to `0.4`. The
/// result is never negative zero.
///
/// # Examples
/// ```
/// use poi_tiles_core::tile::round_to_tile;
///
/// assert_eq!(round_to_tile(40.74), 40.7);
/// assert!(round_to_tile(-0.04).is_sign_positive());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "tile rounding is defined in floating-point terms"
)]
pub fn round_to_tile(coordinate: f64) -> f64 {
    // Adding positive zero turns -0.0 into 0.0 and leaves other values alone.
    (coordinate * TILE_SCALE).round_ties_even() / TILE_SCALE + 0.0
}
