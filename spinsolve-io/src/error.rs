//! Spinsolve codec error types

use std::io;
use std::path::PathBuf;

/// Errors raised by the binary codec, the parameter codec and the directory layer
#[derive(Debug, thiserror::Error)]
pub enum SpinsolveError {
    /// Header/dimension mismatch or truncated payload in a `data.1d` file
    #[error("Malformed binary: {0}")]
    MalformedBinary(String),

    /// Parameter line without a `=` separator (1-based line number)
    #[error("Malformed parameter line {line}: {content:?}")]
    MalformedParameterLine { line: usize, content: String },

    /// Write target exists and overwriting was not allowed
    #[error("File exists: {}", .0.display())]
    FileExists(PathBuf),

    /// Read target directory does not exist
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A parameter required for writing is absent or not numeric
    #[error("Missing numeric parameter: {0}")]
    MissingParameter(String),

    /// Dwell time must be finite and positive
    #[error("Invalid dwell time: {0} s")]
    InvalidDwellTime(f64),

    /// Sample buffer length does not match the requested shape
    #[error("Shape ({rows}, {cols}) does not match {len} samples")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// Filesystem failure on a specific file
    #[error("Failed to access {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stream-level I/O failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SpinsolveError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SpinsolveError::File {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SpinsolveError>;
