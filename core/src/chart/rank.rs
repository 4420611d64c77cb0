//! Rank labels with English ordinal suffixes.
//!
//! Ranks are assigned counting down from the filtered row count as records
//! are consumed in ascending `ehp` order, so the highest score ends up as
//! rank 1 (see the engine). This module only handles the label text.

/// English ordinal suffix for a rank.
///
/// 11/12/13 (and 111, 212, ...) are irregular: the mod-100 check must win
/// over the mod-10 one.
pub fn ordinal_suffix(rank: usize) -> &'static str {
    match rank % 100 {
        11 | 12 | 13 => "th",
        _ => match rank % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Rank rendered with its suffix, e.g. `1st`, `22nd`, `113th`.
pub fn ordinal_label(rank: usize) -> String {
    format!("{rank}{}", ordinal_suffix(rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_table() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (101, "st"),
            (111, "th"),
            (112, "th"),
            (113, "th"),
        ];
        for (rank, expected) in cases {
            assert_eq!(ordinal_suffix(rank), expected, "rank {rank}");
        }
    }

    #[test]
    fn label_joins_rank_and_suffix() {
        assert_eq!(ordinal_label(1), "1st");
        assert_eq!(ordinal_label(112), "112th");
    }
}
