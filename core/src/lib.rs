pub mod chart;
pub mod context;
pub mod dataset;
pub mod storage;

// Re-exports for convenience
pub use chart::{
    BarDescriptor, ChartError, ChartLayout, ChartStyle, FilterCriteria, chart_height,
    ordinal_label, ordinal_suffix, render,
};
pub use context::{AppConfig, ConfigError};
pub use dataset::{BuildError, CanonicalTable, UnitRecord, build_table, workbook};
pub use storage::{StorageError, load_table, write_table};
