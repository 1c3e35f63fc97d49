//! Error types for style extraction.
//!
//! Each variant carries enough context to point at the file that
//! caused the problem.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that can fail while extracting styles.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Things that can go wrong while reading markup or writing output.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Couldn't read or write a file on disk.
    #[error("failed to access file '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filtered styles could not be serialized.
    #[error("failed to serialize styles: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl StyleError {
    /// Creates an IO error with the path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
