//! Persist tiles as one JSON file per populated tile.

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use poi_tiles_core::PointOfInterest;
use poi_tiles_fs::{create_utf8_file, ensure_dir};
use thiserror::Error;

use crate::TileSet;

/// Errors raised while writing tile files.
///
/// Tiles written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum WriteTilesError {
    /// Creating the output directory tree failed.
    #[error("failed to create output directory {path}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Creating or truncating a tile file failed.
    #[error("failed to create tile file {path}")]
    CreateFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Encoding or writing the tile payload failed.
    #[error("failed to write tile file {path}")]
    Serialise {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Flushing buffered tile content failed.
    #[error("failed to flush tile file {path}")]
    Flush {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a completed tile write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileWriteReport {
    /// Number of tile files written.
    pub tiles: usize,
    /// Number of points written across all files.
    pub pois: usize,
    /// Paths of the written files, in write order.
    pub files: Vec<Utf8PathBuf>,
}

/// Write every tile in `tiles` to `<output_dir>/<tile_key>.json`.
///
/// The directory tree is created when missing. Existing files with the same
/// name are replaced, never merged. Files hold a compact JSON array of
/// points with non-ASCII text written as-is.
///
/// # Errors
/// Returns [`WriteTilesError`] on the first directory or file failure.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use poi_tiles_data::{TileSet, write_tiles};
///
/// # fn main() -> Result<(), poi_tiles_data::WriteTilesError> {
/// let report = write_tiles(&TileSet::new(), Utf8Path::new("tiles"))?;
/// assert_eq!(report.tiles, 0);
/// # Ok(())
/// # }
/// ```
pub fn write_tiles(
    tiles: &TileSet,
    output_dir: &Utf8Path,
) -> Result<TileWriteReport, WriteTilesError> {
    ensure_dir(output_dir).map_err(|source| WriteTilesError::CreateDirectory {
        path: output_dir.to_path_buf(),
        source,
    })?;
    debug!("Writing {} tiles into {output_dir}", tiles.len());

    let mut report = TileWriteReport::default();
    for (key, pois) in tiles.iter() {
        let path = output_dir.join(key.file_name());
        write_tile(&path, pois)?;
        debug!("Wrote {} points to {path}", pois.len());
        report.tiles += 1;
        report.pois += pois.len();
        report.files.push(path);
    }
    Ok(report)
}

/// Write one tile file holding `pois`, replacing any existing file.
///
/// # Errors
/// Returns [`WriteTilesError`] when the file cannot be created, written or
/// flushed.
pub fn write_tile(path: &Utf8Path, pois: &[PointOfInterest]) -> Result<(), WriteTilesError> {
    let file = create_utf8_file(path).map_err(|source| WriteTilesError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, pois).map_err(|source| WriteTilesError::Serialise {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| WriteTilesError::Flush {
        path: path.to_path_buf(),
        source,
    })
}
