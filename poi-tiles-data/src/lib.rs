//! Loading, partitioning and persistence for POI tiles.
//!
//! Responsibilities:
//! - Read OpenStreetMap XML exports into [`RawNode`] values.
//! - Group derived points of interest by tile.
//! - Write one JSON artefact per populated tile.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `poi-tiles-core`).
//!
//! Invariants:
//! - The whole input is parsed before anything touches the output directory.
//! - No global mutable state.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use geo::Rect;
use log::info;
use thiserror::Error;

pub mod osm_xml;
pub mod tiles;
pub mod writer;

pub use osm_xml::{OsmXmlError, OsmXmlParseError, load_osm_xml, parse_osm_xml};
pub use poi_tiles_core::RawNode;
pub use tiles::TileSet;
pub use writer::{TileWriteReport, WriteTilesError, write_tile, write_tiles};

/// Summary of an extraction run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractReport {
    /// Nodes read from the input, named or not.
    pub nodes: usize,
    /// Points of interest written.
    pub pois: usize,
    /// Tile files written.
    pub tiles: usize,
    /// Bounding box of the written points, `x = longitude`, `y = latitude`.
    pub bounds: Option<Rect<f64>>,
}

/// Errors returned by [`extract_poi_tiles`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input could not be loaded; nothing was written.
    #[error(transparent)]
    Load(#[from] OsmXmlError),
    /// Writing tiles failed; earlier tiles may remain on disk.
    #[error(transparent)]
    Write(#[from] WriteTilesError),
}

impl ExtractError {
    /// Whether the failure came from reading or parsing the input.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Whether the failure came from writing the output.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

/// Convert an OSM XML export into per-tile JSON files under `output_dir`.
///
/// # Errors
/// Returns [`ExtractError::Load`] before any filesystem change when the input
/// cannot be parsed, and [`ExtractError::Write`] when the output cannot be
/// written.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use poi_tiles_data::extract_poi_tiles;
///
/// # fn main() -> Result<(), poi_tiles_data::ExtractError> {
/// let report = extract_poi_tiles(Utf8Path::new("nyc.osm"), Utf8Path::new("tiles"))?;
/// println!("Wrote {} points into {} tiles", report.pois, report.tiles);
/// # Ok(())
/// # }
/// ```
pub fn extract_poi_tiles(
    input: &Utf8Path,
    output_dir: &Utf8Path,
) -> Result<ExtractReport, ExtractError> {
    let nodes = load_osm_xml(input)?;
    let tiles = TileSet::from_nodes(&nodes);
    let written = write_tiles(&tiles, output_dir)?;
    let report = ExtractReport {
        nodes: nodes.len(),
        pois: written.pois,
        tiles: written.tiles,
        bounds: tiles.bounds(),
    };
    info!(
        "Extracted {} points of interest from {} nodes into {} tiles under {output_dir}",
        report.pois, report.nodes, report.tiles
    );
    Ok(report)
}

#[cfg(test)]
mod tests;
