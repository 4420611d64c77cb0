//! Shared CLI state.

use std::path::Path;

use alehp_core::{AppConfig, CanonicalTable, ChartStyle, FilterCriteria};

/// State carried across REPL commands: config, styling, the current
/// selector values, and the canonical table once it has been loaded.
pub struct CliContext {
    pub config: AppConfig,
    pub style: ChartStyle,
    pub criteria: FilterCriteria,
    table: Option<CanonicalTable>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
            style: ChartStyle::default(),
            criteria: FilterCriteria::any(),
            table: None,
        }
    }

    /// The canonical table, loading it from the configured dataset path on
    /// first use. The table is read-only for the rest of the session;
    /// only a `build` replaces it.
    pub fn table(&mut self) -> Result<&CanonicalTable, String> {
        if self.table.is_none() {
            let path = Path::new(&self.config.dataset_path);
            let table = alehp_core::load_table(path)
                .map_err(|e| format!("failed to load canonical table: {e}"))?;
            self.table = Some(table);
        }
        Ok(self.table.as_ref().expect("table loaded above"))
    }

    /// Replace the in-memory table after an offline build.
    pub fn set_table(&mut self, table: CanonicalTable) {
        self.table = Some(table);
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
