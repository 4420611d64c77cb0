//! Error types for chart layout

use thiserror::Error;

/// Errors while resolving a filtered record set into drawable bars
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown armor class '{armor}' has no palette color")]
    UnknownArmorClass { armor: String },
}
