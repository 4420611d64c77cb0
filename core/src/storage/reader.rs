//! CSV reader for the canonical table.

use std::path::Path;
use tracing::debug;

use super::{IndexedRow, StorageError};
use crate::dataset::{CanonicalTable, UnitRecord};

/// Load and validate the canonical table.
///
/// The query layer assumes a valid table exists: a missing or malformed
/// file is fatal here, and so is a file whose rows are not in ascending
/// `ehp` order (rank math depends on it).
pub fn load_table(path: &Path) -> Result<CanonicalTable, StorageError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<IndexedRow>() {
        let row = row.map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(UnitRecord {
            name: row.name,
            armor: row.armor,
            hull: row.hull,
            ehp: row.ehp,
        });
    }

    if let Some(index) = first_order_violation(&records) {
        return Err(StorageError::UnsortedRow {
            path: path.to_path_buf(),
            index,
        });
    }

    debug!(rows = records.len(), path = %path.display(), "loaded canonical table");
    Ok(CanonicalTable::from_sorted(records))
}

/// Index of the first row that breaks ascending order, if any.
fn first_order_violation(records: &[UnitRecord]) -> Option<usize> {
    records
        .windows(2)
        .position(|w| w[0].ehp > w[1].ehp)
        .map(|i| i + 1)
}
