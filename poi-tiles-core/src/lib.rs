//! Core domain types for turning OpenStreetMap nodes into tiled points of
//! interest.
//!
//! Responsibilities:
//! - Model raw nodes and their free-form tag maps.
//! - Decide which nodes become points of interest and derive their fields.
//! - Compute the 0.1-degree tile key that partitions points of interest.
//!
//! Boundaries:
//! - No I/O. Parsing and persistence live in `poi-tiles-data`.
//!
//! Invariants:
//! - Every [`PointOfInterest`] carries a non-empty name.
//! - A point's [`TileKey`] depends only on its own coordinates.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod node;
pub mod poi;
pub mod tags;
pub mod tile;

pub use node::RawNode;
pub use poi::PointOfInterest;
pub use tags::Tags;
pub use tile::TileKey;
