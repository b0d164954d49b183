//! Error types for tsharvest-media.

use std::io;
use thiserror::Error;

/// Result type for tsharvest-media operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tsharvest-media operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred while emitting output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A segment reference line has no extractable `.ts` file name.
    #[error("{manifest}:{line_number}: segment reference has no .ts file name: {line:?}")]
    MalformedManifestLine {
        manifest: String,
        line_number: usize,
        line: String,
    },

    /// A concat list line is not of the form `file <name>`.
    #[error("concat list line {line_number}: expected `file <name>`, got {line:?}")]
    MalformedConcatLine { line_number: usize, line: String },
}

impl Error {
    /// Create a malformed manifest line error.
    pub fn malformed_line(
        manifest: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        Self::MalformedManifestLine {
            manifest: manifest.into(),
            line_number,
            line: line.into(),
        }
    }
}
