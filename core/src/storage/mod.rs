//! Canonical table persistence.
//!
//! The table lives on disk as CSV with an explicit leading row index,
//! in ascending `ehp` order. The writer runs offline as the last step of
//! the dataset builder; the reader loads the file once at query-serving
//! startup and the table is immutable from then on.

pub mod error;
pub mod reader;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use error::StorageError;
pub use reader::load_table;
pub use writer::write_table;

/// On-disk row shape: canonical schema plus the row index column.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct IndexedRow {
    pub index: usize,
    pub name: String,
    pub armor: String,
    pub hull: String,
    pub ehp: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builder::{self, HullRow, RawScore, RawStatRow};
    use crate::dataset::CanonicalTable;

    fn sample_table() -> CanonicalTable {
        let stats = [
            RawStatRow {
                name: "A".into(),
                armor: "Light".into(),
                score: RawScore::Int(100),
            },
            RawStatRow {
                name: "B".into(),
                armor: "Heavy".into(),
                score: RawScore::Int(300),
            },
            RawStatRow {
                name: "C".into(),
                armor: "Light".into(),
                score: RawScore::Int(200),
            },
        ];
        let details = [
            HullRow {
                name: "A".into(),
                hull: "DD".into(),
            },
            HullRow {
                name: "B".into(),
                hull: "CA".into(),
            },
            HullRow {
                name: "C".into(),
                hull: "DD".into(),
            },
        ];
        builder::build_table(&stats, &details).unwrap()
    }

    #[test]
    fn round_trips_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vg.csv");

        let table = sample_table();
        write_table(&path, &table).unwrap();
        let loaded = load_table(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        let table = sample_table();
        write_table(&first, &table).unwrap();
        write_table(&second, &table).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn writes_index_and_canonical_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vg.csv");

        write_table(&path, &sample_table()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("index,name,armor,hull,ehp"));
        assert_eq!(lines.next(), Some("0,A,Light,DD,100"));
    }

    #[test]
    fn rejects_unsorted_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vg.csv");
        std::fs::write(
            &path,
            "index,name,armor,hull,ehp\n0,B,Heavy,CA,300\n1,A,Light,DD,100\n",
        )
        .unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, StorageError::UnsortedRow { index: 1, .. }));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_table(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn malformed_score_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vg.csv");
        std::fs::write(&path, "index,name,armor,hull,ehp\n0,A,Light,DD,lots\n").unwrap();
        assert!(matches!(load_table(&path), Err(StorageError::Read { .. })));
    }
}
