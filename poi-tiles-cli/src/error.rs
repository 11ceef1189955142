//! Error types emitted by the POI tiles CLI.

use poi_tiles_data::ExtractError;
use thiserror::Error;

/// Errors emitted by the POI tiles CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The extraction pipeline failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl CliError {
    /// Whether the invocation itself was wrong and the usage line applies.
    ///
    /// Help and version requests are reported through clap but are not
    /// usage errors.
    pub fn is_usage(&self) -> bool {
        match self {
            Self::ArgumentParsing(err) => err.use_stderr(),
            Self::Extract(_) => false,
        }
    }
}
