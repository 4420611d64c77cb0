//! Query & layout engine
//!
//! Turns the canonical table plus live filter selections into an ordered
//! list of drawable bars and a chart height. Pure and synchronous: each
//! selector change triggers a full re-run against the in-memory table.

pub mod engine;
pub mod error;
pub mod filter;
pub mod layout;
pub mod rank;
pub mod style;


pub use engine::{BarDescriptor, ChartLayout, render};
pub use error::ChartError;
pub use filter::FilterCriteria;
pub use layout::chart_height;
pub use rank::{ordinal_label, ordinal_suffix};
pub use style::ChartStyle;
