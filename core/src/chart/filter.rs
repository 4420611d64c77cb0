//! Categorical filtering of the canonical table.
//!
//! Filtering is a pure, order-preserving subsequence selection: records
//! are never re-sorted, so the ascending-`ehp` invariant of the source
//! table carries through to every filtered result.

use serde::{Deserialize, Serialize};

use crate::dataset::UnitRecord;

/// Optional equality predicates on the two categorical columns.
///
/// `None` means "All": no predicate on that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub armor: Option<String>,
    pub hull: Option<String>,
}

impl FilterCriteria {
    /// Match-all criteria (both selectors on "All").
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_armor(mut self, armor: impl Into<String>) -> Self {
        self.armor = Some(armor.into());
        self
    }

    pub fn with_hull(mut self, hull: impl Into<String>) -> Self {
        self.hull = Some(hull.into());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.armor.is_none() && self.hull.is_none()
    }

    pub fn matches(&self, record: &UnitRecord) -> bool {
        self.armor.as_deref().is_none_or(|a| record.armor == a)
            && self.hull.as_deref().is_none_or(|h| record.hull == h)
    }
}

/// Select the matching subsequence, preserving input order.
pub fn apply<'a>(records: &'a [UnitRecord], criteria: &FilterCriteria) -> Vec<&'a UnitRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, armor: &str, hull: &str, ehp: i32) -> UnitRecord {
        UnitRecord {
            name: name.to_string(),
            armor: armor.to_string(),
            hull: hull.to_string(),
            ehp,
        }
    }

    fn sample() -> Vec<UnitRecord> {
        vec![
            record("A", "Light", "DD", 100),
            record("C", "Light", "CL", 200),
            record("B", "Heavy", "CA", 300),
            record("D", "Medium", "DD", 400),
        ]
    }

    #[test]
    fn unfiltered_keeps_everything() {
        let records = sample();
        assert_eq!(apply(&records, &FilterCriteria::any()).len(), 4);
    }

    #[test]
    fn armor_and_hull_predicates_combine() {
        let records = sample();
        let criteria = FilterCriteria::any().with_armor("Light").with_hull("DD");
        let names: Vec<_> = apply(&records, &criteria)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn filtering_preserves_ascending_order() {
        let records = sample();
        let criteria = FilterCriteria::any().with_hull("DD");
        let filtered = apply(&records, &criteria);
        assert!(filtered.windows(2).all(|w| w[0].ehp <= w[1].ehp));
        let names: Vec<_> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria::any().with_armor("Light");
        let once: Vec<UnitRecord> = apply(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<UnitRecord> = apply(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
