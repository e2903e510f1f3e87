/// Errors from the lookup domain layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

/// Terminal errors that abort a lookup run.
///
/// Per-identifier lookup failures are not represented here; they are
/// rendered inline in the report and batch processing continues.
#[derive(Debug, Error)]
pub enum DexError {
    /// A batch input file exists but cannot be read.
    #[error("Cannot read input file '{}': {source}", path.display())]
    InputFile {
        /// The batch file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The `--output` path cannot be written.
    #[error("Cannot write report to '{}': {source}", path.display())]
    ReportFile {
        /// The output file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Every identifier in the request failed to resolve.
    #[error("All {count} lookups failed")]
    AllLookupsFailed {
        /// Number of identifiers attempted.
        count: usize,
    },

    /// An underlying API client error.
    #[error("PokeAPI error: {0}")]
    Api(#[from] ApiError),
}

/// Exit code mapping for `DexError` variants.
impl DexError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputFile { .. } | Self::ReportFile { .. } => 3,
            Self::AllLookupsFailed { .. } => 4,
            Self::Api(_) => 1,
        }
    }
}
