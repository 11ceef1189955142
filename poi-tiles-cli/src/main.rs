//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    ExitCode::from(poi_tiles_cli::run())
}
