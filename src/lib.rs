//! Facade crate for the POI tiles pipeline.
//!
//! This crate re-exports the core domain types and, behind the `data`
//! feature, the loader, tiling and writer entry points.

#![forbid(unsafe_code)]

pub use poi_tiles_core::{PointOfInterest, RawNode, Tags, TileKey};

#[cfg(feature = "data")]
pub use poi_tiles_data::{
    ExtractError, ExtractReport, OsmXmlError, OsmXmlParseError, TileSet, TileWriteReport,
    WriteTilesError, extract_poi_tiles, load_osm_xml, parse_osm_xml, write_tiles,
};
