//! CSV writer for the canonical table.

use std::path::Path;
use tracing::info;

use super::{IndexedRow, StorageError};
use crate::dataset::CanonicalTable;

/// Write the canonical table to `path`, creating parent directories as
/// needed. Output is deterministic: the same table always produces the
/// same bytes, so rebuilding from identical input is idempotent.
pub fn write_table(path: &Path, table: &CanonicalTable) -> Result<(), StorageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, record) in table.iter().enumerate() {
        writer
            .serialize(IndexedRow {
                index,
                name: record.name.clone(),
                armor: record.armor.clone(),
                hull: record.hull.clone(),
                ehp: record.ehp,
            })
            .map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush()?;

    info!(rows = table.len(), path = %path.display(), "wrote canonical table");
    Ok(())
}
