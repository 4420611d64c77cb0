//! Workbook extraction for the dataset builder.
//!
//! Reads the stat sheet and the hull lookup sheet out of the source
//! `.xlsm` workbook. Columns are located by header name, not position,
//! so upstream sheet edits that only reorder columns keep working.

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::Path;
use tracing::debug;

use super::builder::{HullRow, RawScore, RawStatRow};
use super::error::BuildError;

/// Header names in the stats sheet.
const STAT_NAME_COLUMN: &str = "Ship";
const STAT_ARMOR_COLUMN: &str = "Armor";
const STAT_SCORE_COLUMN: &str = "SORT";

/// Header names in the hull lookup sheet.
const LOOKUP_NAME_COLUMN: &str = "Ship";
const LOOKUP_HULL_COLUMN: &str = "Type";

/// Load the raw stat rows and hull lookup rows from a workbook.
pub fn load_sheets(
    path: &Path,
    stats_sheet: &str,
    details_sheet: &str,
) -> Result<(Vec<RawStatRow>, Vec<HullRow>), BuildError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| BuildError::OpenWorkbook {
        path: path.to_path_buf(),
        source,
    })?;

    let stats_range = sheet_range(&mut workbook, stats_sheet)?;
    let details_range = sheet_range(&mut workbook, details_sheet)?;

    let stats = read_stat_rows(&stats_range, stats_sheet)?;
    let details = read_hull_rows(&details_range, details_sheet)?;

    debug!(
        stats = stats.len(),
        details = details.len(),
        workbook = %path.display(),
        "loaded worksheets"
    );
    Ok((stats, details))
}

fn sheet_range(
    workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>,
    name: &str,
) -> Result<Range<Data>, BuildError> {
    workbook
        .worksheet_range(name)
        .map_err(|source| BuildError::SheetNotFound {
            name: name.to_string(),
            source,
        })
}

fn read_stat_rows(range: &Range<Data>, sheet: &str) -> Result<Vec<RawStatRow>, BuildError> {
    let name_col = column_index(range, sheet, STAT_NAME_COLUMN)?;
    let armor_col = column_index(range, sheet, STAT_ARMOR_COLUMN)?;
    let score_col = column_index(range, sheet, STAT_SCORE_COLUMN)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(1) {
        let Some(name) = cell_text(row.get(name_col)) else {
            continue; // trailing blank rows
        };
        rows.push(RawStatRow {
            name,
            armor: cell_text(row.get(armor_col)).unwrap_or_default(),
            score: cell_score(row.get(score_col)),
        });
    }
    Ok(rows)
}

fn read_hull_rows(range: &Range<Data>, sheet: &str) -> Result<Vec<HullRow>, BuildError> {
    let name_col = column_index(range, sheet, LOOKUP_NAME_COLUMN)?;
    let hull_col = column_index(range, sheet, LOOKUP_HULL_COLUMN)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(1) {
        let Some(name) = cell_text(row.get(name_col)) else {
            continue;
        };
        rows.push(HullRow {
            name,
            hull: cell_text(row.get(hull_col)).unwrap_or_default(),
        });
    }
    Ok(rows)
}

/// Locate a column by its header cell in the first row.
fn column_index(range: &Range<Data>, sheet: &str, column: &str) -> Result<usize, BuildError> {
    let headers = range.rows().next().unwrap_or(&[]);
    headers
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == column))
        .ok_or_else(|| BuildError::ColumnNotFound {
            sheet: sheet.to_string(),
            column: column.to_string(),
        })
}

fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell {
        Some(Data::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn cell_score(cell: Option<&Data>) -> RawScore {
    match cell {
        Some(Data::Int(i)) => RawScore::Int(*i),
        Some(Data::Float(f)) => RawScore::Float(*f),
        Some(Data::String(s)) => RawScore::Text(s.clone()),
        None | Some(Data::Empty) => RawScore::Empty,
        Some(other) => RawScore::Text(format!("{other:?}")),
    }
}
