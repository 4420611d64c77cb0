//! Error types for dataset building

use std::path::PathBuf;
use thiserror::Error;

/// Errors while building the canonical table from raw worksheet data
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to open workbook {path}")]
    OpenWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("worksheet '{name}' not found in workbook")]
    SheetNotFound {
        name: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("worksheet '{sheet}' has no '{column}' column")]
    ColumnNotFound { sheet: String, column: String },

    #[error("no hull classification found for unit '{name}'")]
    HullLookup { name: String },

    #[error("non-numeric score for unit '{name}': {value}")]
    ScoreType { name: String, value: String },
}
