//! Chart height as a function of row count.
//!
//! The per-row pixel budget shrinks as the set grows, which keeps bar
//! thickness roughly constant: small filtered sets don't blow up into
//! oversized bars and large sets don't overflow the viewport. The
//! breakpoints and multipliers are contractual; changing them breaks
//! visual parity with the deployed chart.

/// Height of a chart with exactly one bar.
pub const SINGLE_ROW_HEIGHT: u32 = 75;

/// Per-row height for small sets (2–9 rows).
pub const SMALL_SET_ROW_HEIGHT: f64 = 50.0;

/// Per-row height for large sets (10+ rows).
pub const LARGE_SET_ROW_HEIGHT: f64 = 21.5;

/// First row count that uses the large-set budget.
pub const LARGE_SET_MIN_ROWS: usize = 10;

/// Total chart height for a filtered row count.
///
/// `None` means no chart at all: a zero-row result renders as a textual
/// "no data" notice instead of an empty plot.
pub fn chart_height(rows: usize) -> Option<u32> {
    match rows {
        0 => None,
        1 => Some(SINGLE_ROW_HEIGHT),
        n if n < LARGE_SET_MIN_ROWS => Some(round_px(n as f64 * SMALL_SET_ROW_HEIGHT)),
        n => Some(round_px(n as f64 * LARGE_SET_ROW_HEIGHT)),
    }
}

/// Ties round to even, matching the reference chart (236.5 → 236).
fn round_px(px: f64) -> u32 {
    px.round_ties_even() as u32
}
