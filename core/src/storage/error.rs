//! Error types for canonical table storage

use std::path::PathBuf;
use thiserror::Error;

/// Errors during canonical table file operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write canonical table {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read canonical table {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("canonical table {path} violates ascending ehp order at row {index}")]
    UnsortedRow { path: PathBuf, index: usize },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
