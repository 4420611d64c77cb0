use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Paths and sheet names for the offline dataset build and the query
/// layer's canonical table load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source workbook with the raw per-unit stats.
    pub workbook_path: String,
    /// Sheet holding name / armor / raw score rows.
    #[serde(default = "default_stats_sheet")]
    pub stats_sheet: String,
    /// Sheet mapping unit name to hull class.
    #[serde(default = "default_details_sheet")]
    pub details_sheet: String,
    /// Where the canonical CSV lives.
    pub dataset_path: String,
}

fn default_stats_sheet() -> String {
    "125 V eHP".to_string()
}

fn default_details_sheet() -> String {
    "125 V".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workbook_path: "data/eHP2.xlsm".to_string(),
            stats_sheet: default_stats_sheet(),
            details_sheet: default_details_sheet(),
            dataset_path: "data/vg.csv".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("alehp", None).unwrap_or_default()
    }

    pub fn save(self) -> Result<(), ConfigError> {
        confy::store("alehp", None, self).map_err(ConfigError::Save)
    }
}
