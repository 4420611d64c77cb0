//! Raw worksheet rows to canonical table.
//!
//! Joins the per-unit stat rows against the hull lookup sheet, coerces the
//! raw score to the fixed-width `ehp` column, and sorts ascending. Every
//! unit must resolve to exactly one hull class; there is no fallback.

use hashbrown::HashMap;
use std::fmt;
use tracing::debug;

use super::error::BuildError;
use super::{CanonicalTable, UnitRecord};

/// A raw score cell as it arrives from the worksheet.
///
/// Spreadsheet numerics usually come through as floats even when the cell
/// displays an integer, so coercion accepts both and truncates.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScore {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl RawScore {
    fn coerce(&self) -> Option<i32> {
        match self {
            RawScore::Int(i) => i32::try_from(*i).ok(),
            RawScore::Float(f) => coerce_float(*f),
            RawScore::Text(s) => s.trim().parse::<f64>().ok().and_then(coerce_float),
            RawScore::Empty => None,
        }
    }
}

fn coerce_float(f: f64) -> Option<i32> {
    if !f.is_finite() || f.trunc() < i32::MIN as f64 || f.trunc() > i32::MAX as f64 {
        return None;
    }
    Some(f.trunc() as i32)
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawScore::Int(i) => write!(f, "{i}"),
            RawScore::Float(v) => write!(f, "{v}"),
            RawScore::Text(s) => write!(f, "'{s}'"),
            RawScore::Empty => write!(f, "<empty>"),
        }
    }
}

/// One row of the raw stats worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStatRow {
    pub name: String,
    pub armor: String,
    pub score: RawScore,
}

/// One row of the hull lookup worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct HullRow {
    pub name: String,
    pub hull: String,
}

/// Build the canonical table from raw stat rows and the hull lookup sheet.
///
/// Fails on the first unit with no hull classification or a score that
/// cannot be coerced to an integer. Re-running with identical input yields
/// an identical table.
pub fn build_table(stats: &[RawStatRow], details: &[HullRow]) -> Result<CanonicalTable, BuildError> {
    let mut hull_index: HashMap<&str, &str> = HashMap::with_capacity(details.len());
    for row in details {
        // First occurrence wins, matching the lookup sheet's own convention
        hull_index
            .entry(row.name.as_str())
            .or_insert(row.hull.as_str());
    }

    let mut records = Vec::with_capacity(stats.len());
    for row in stats {
        let hull = hull_index
            .get(row.name.as_str())
            .ok_or_else(|| BuildError::HullLookup {
                name: row.name.clone(),
            })?;
        let ehp = row.score.coerce().ok_or_else(|| BuildError::ScoreType {
            name: row.name.clone(),
            value: row.score.to_string(),
        })?;
        records.push(UnitRecord {
            name: row.name.clone(),
            armor: row.armor.clone(),
            hull: (*hull).to_string(),
            ehp,
        });
    }

    // Ascending by score. Name is the secondary key so exact ties stay
    // deterministic even if the worksheet rows get reordered.
    records.sort_by(|a, b| a.ehp.cmp(&b.ehp).then_with(|| a.name.cmp(&b.name)));

    debug!(units = records.len(), "built canonical table");
    Ok(CanonicalTable::from_sorted(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, armor: &str, score: RawScore) -> RawStatRow {
        RawStatRow {
            name: name.to_string(),
            armor: armor.to_string(),
            score,
        }
    }

    fn hull(name: &str, hull: &str) -> HullRow {
        HullRow {
            name: name.to_string(),
            hull: hull.to_string(),
        }
    }

    #[test]
    fn joins_and_sorts_ascending() {
        let stats = [
            stat("A", "Light", RawScore::Int(100)),
            stat("B", "Heavy", RawScore::Int(300)),
            stat("C", "Light", RawScore::Int(200)),
        ];
        let details = [hull("A", "DD"), hull("B", "CA"), hull("C", "DD")];

        let table = build_table(&stats, &details).unwrap();
        let rows: Vec<_> = table
            .iter()
            .map(|r| (r.name.as_str(), r.armor.as_str(), r.hull.as_str(), r.ehp))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("A", "Light", "DD", 100),
                ("C", "Light", "DD", 200),
                ("B", "Heavy", "CA", 300),
            ]
        );
    }

    #[test]
    fn missing_hull_is_fatal() {
        let stats = [stat("A", "Light", RawScore::Int(100))];
        let err = build_table(&stats, &[]).unwrap_err();
        assert!(matches!(err, BuildError::HullLookup { name } if name == "A"));
    }

    #[test]
    fn non_numeric_score_is_fatal() {
        let stats = [stat("A", "Light", RawScore::Text("n/a".into()))];
        let details = [hull("A", "DD")];
        let err = build_table(&stats, &details).unwrap_err();
        assert!(matches!(err, BuildError::ScoreType { name, .. } if name == "A"));
    }

    #[test]
    fn score_coercion_accepts_worksheet_numerics() {
        let stats = [
            stat("A", "Light", RawScore::Float(100.0)),
            stat("B", "Medium", RawScore::Text(" 250 ".into())),
        ];
        let details = [hull("A", "DD"), hull("B", "CL")];
        let table = build_table(&stats, &details).unwrap();
        assert_eq!(table.records()[0].ehp, 100);
        assert_eq!(table.records()[1].ehp, 250);
    }

    #[test]
    fn empty_score_is_fatal() {
        let stats = [stat("A", "Light", RawScore::Empty)];
        let details = [hull("A", "DD")];
        assert!(build_table(&stats, &details).is_err());
    }

    #[test]
    fn equal_scores_break_ties_by_name() {
        let stats = [
            stat("Zeta", "Light", RawScore::Int(150)),
            stat("Alpha", "Medium", RawScore::Int(150)),
        ];
        let details = [hull("Zeta", "DD"), hull("Alpha", "CL")];
        let table = build_table(&stats, &details).unwrap();
        assert_eq!(table.records()[0].name, "Alpha");
        assert_eq!(table.records()[1].name, "Zeta");
    }

    #[test]
    fn duplicate_lookup_rows_keep_first_hull() {
        let stats = [stat("A", "Light", RawScore::Int(100))];
        let details = [hull("A", "DD"), hull("A", "CL")];
        let table = build_table(&stats, &details).unwrap();
        assert_eq!(table.records()[0].hull, "DD");
    }

    #[test]
    fn rebuild_is_deterministic() {
        let stats = [
            stat("A", "Light", RawScore::Int(100)),
            stat("B", "Heavy", RawScore::Int(300)),
            stat("C", "Light", RawScore::Int(200)),
        ];
        let details = [hull("A", "DD"), hull("B", "CA"), hull("C", "DD")];
        let first = build_table(&stats, &details).unwrap();
        let second = build_table(&stats, &details).unwrap();
        assert_eq!(first, second);
    }
}
