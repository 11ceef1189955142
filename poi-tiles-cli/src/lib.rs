//! Command-line interface for converting OSM XML exports into POI tiles.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use log::debug;
use poi_tiles_data::{ExtractReport, extract_poi_tiles};

mod error;

pub use error::CliError;

/// One-line usage printed when the invocation is incomplete.
pub const USAGE: &str = "Usage: poi-tiles <input.osm> <output_dir>";

/// Exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for usage and runtime failures.
pub const EXIT_FAILURE: u8 = 1;

/// Run the CLI with the current process arguments, writing to the process streams.
pub fn run() -> u8 {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with_args(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock())
}

/// Run the CLI with explicit arguments and output streams, returning the exit status.
///
/// Usage errors print [`USAGE`] to `stdout`; every other failure is reported
/// on `stderr` with its full cause chain.
pub fn run_with_args<I, T>(args: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match execute(args) {
        Ok(_) => EXIT_SUCCESS,
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => {
            // --help and --version render through clap and succeed.
            let _ = write!(stdout, "{err}");
            EXIT_SUCCESS
        }
        Err(err) if err.is_usage() => {
            let _ = writeln!(stderr, "poi-tiles: {err}");
            let _ = writeln!(stdout, "{USAGE}");
            EXIT_FAILURE
        }
        Err(err) => {
            let _ = writeln!(stderr, "poi-tiles: {:#}", eyre::Report::new(err));
            EXIT_FAILURE
        }
    }
}

fn execute<I, T>(args: I) -> Result<ExtractReport, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    run_extract(cli.extract)
}

fn run_extract(args: ExtractArgs) -> Result<ExtractReport, CliError> {
    debug!(
        "Extracting POI tiles from {} into {}",
        args.input, args.output_dir
    );
    Ok(extract_poi_tiles(&args.input, &args.output_dir)?)
}

#[derive(Debug, Parser)]
#[command(
    name = "poi-tiles",
    about = "Split an OpenStreetMap XML export into per-tile POI files",
    long_about = "Read named nodes from an OpenStreetMap XML export and write \
                  one JSON file per 0.1-degree tile.",
    version
)]
struct Cli {
    #[command(flatten)]
    extract: ExtractArgs,
}

/// Arguments describing the extraction input and output.
///
/// Both paths are required on the command line; nothing else can supply them.
#[derive(Debug, Clone, Args)]
struct ExtractArgs {
    /// Path to the OpenStreetMap XML export.
    #[arg(value_name = "input.osm")]
    input: Utf8PathBuf,
    /// Directory that receives the tile files; created when missing.
    #[arg(value_name = "output_dir")]
    output_dir: Utf8PathBuf,
}

#[cfg(test)]
mod tests;
