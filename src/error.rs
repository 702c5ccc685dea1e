//! Error taxonomy for loading inputs and validating the reference sequence.
//!
//! Only load-boundary problems are errors. A star (or one of its corners)
//! whose reddening line misses the sequence simply produces no records, and a
//! segment parallel to the reddening line is skipped the same way.

use std::path::PathBuf;
use thiserror::Error;

pub type UnredResult<T> = Result<T, UnredError>;

#[derive(Error, Debug)]
pub enum UnredError {
    /// Input file does not exist.
    #[error("File {} doesn't exist!", .path.display())]
    MissingFile { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line has the wrong shape or an unparsable value.
    #[error("{source_name}:{line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Structurally invalid data: too few or non-finite sequence points,
    /// negative star uncertainties.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Two consecutive reference points share an x coordinate, so the
    /// segment between them has no slope.
    #[error("Degenerate reference sequence: points {index} and {} share x = {x}", .index + 1)]
    DegenerateGeometry { index: usize, x: f64 },
}

impl UnredError {
    pub(crate) fn parse(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }
}
