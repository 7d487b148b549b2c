//! Error types for the storage layer.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or writing the history data file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing failed.
    #[error("failed to process {}: {}", .path.display(), .source)]
    Csv {
        /// The file involved.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wraps a CSV error with the path it occurred on.
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
