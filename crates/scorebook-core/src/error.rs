//! Store error types.
//!
//! Only failures that abort an operation live here. A score line that does
//! not parse is not an error: the record is skipped and reported through
//! [`LoadReport`](crate::model::LoadReport) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a score file into a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input file is missing or could not be opened or read.
    #[error("file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns `true` if the underlying I/O error was a plain missing file,
    /// as opposed to a permission or read failure.
    pub fn is_missing(&self) -> bool {
        match self {
            StoreError::NotFound { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
