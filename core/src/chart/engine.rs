//! Query & layout engine: filtered records to drawable bars.
//!
//! Each render is a full, independent pass over the immutable canonical
//! table: filter, compute the chart height, then walk the survivors in
//! ascending order assigning rank, label, color and hover text. Nothing
//! is cached between renders.

use tracing::debug;

use super::error::ChartError;
use super::filter::{self, FilterCriteria};
use super::layout;
use super::rank;
use super::style::ChartStyle;
use crate::dataset::CanonicalTable;

/// One render-ready bar.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BarDescriptor {
    /// 1 = highest `ehp` in the filtered set.
    pub rank: usize,
    /// Rank with its English ordinal suffix (`1st`, `22nd`, ...).
    pub ordinal_label: String,
    /// Y-axis category label.
    pub name: String,
    /// Hex fill color resolved from the armor class.
    pub color: String,
    /// Single-line annotation: `"{rank}{suffix}, {name}, {ehp}"`.
    pub hover_text: String,
    /// Bar length AND the text printed past the bar's end. One source
    /// value; the two must never be formatted independently.
    pub value: i32,
}

/// The outcome of one query: a drawable chart or the no-data notice.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    Bars {
        /// Total chart height from the row-count bands.
        height: u32,
        /// Fixed x-axis upper bound the bars scale against.
        axis_max: f64,
        /// Bars in ascending `ehp` order. Drawn in sequence this stacks
        /// the highest score at the visual top.
        bars: Vec<BarDescriptor>,
    },
    /// Zero rows survived the filter. Not an error: the presentation
    /// layer shows a plain-text notice instead of a chart.
    NoData,
}

/// Run the full query: filter the table and lay out the surviving bars.
pub fn render(
    table: &CanonicalTable,
    criteria: &FilterCriteria,
    style: &ChartStyle,
) -> Result<ChartLayout, ChartError> {
    let rows = filter::apply(table.records(), criteria);
    debug!(total = table.len(), filtered = rows.len(), "filtered canonical table");

    let Some(height) = layout::chart_height(rows.len()) else {
        return Ok(ChartLayout::NoData);
    };

    // Countdown rank: the first record consumed (lowest ehp) reads as the
    // last place, the final one as rank 1.
    let mut rank_counter = rows.len();
    let mut bars = Vec::with_capacity(rows.len());
    for record in rows {
        let color = style
            .color_for(&record.armor)
            .ok_or_else(|| ChartError::UnknownArmorClass {
                armor: record.armor.clone(),
            })?;
        let ordinal_label = rank::ordinal_label(rank_counter);
        let hover_text = format!("{ordinal_label}, {}, {}", record.name, record.ehp);
        bars.push(BarDescriptor {
            rank: rank_counter,
            ordinal_label,
            name: record.name.clone(),
            color: color.to_string(),
            hover_text,
            value: record.ehp,
        });
        rank_counter -= 1;
    }

    Ok(ChartLayout::Bars {
        height,
        axis_max: style.axis_max(),
        bars,
    })
}
