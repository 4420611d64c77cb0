//! Injected chart styling and category configuration.
//!
//! The palette and the category enumerations are explicit values handed
//! to the engine, not module-level constants, so tests (and any future
//! config surface) can substitute their own.

use hashbrown::HashMap;

/// Immutable styling configuration for one chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Case-folded armor class -> hex color.
    palette: HashMap<String, String>,
    /// Armor classes offered by the selector, canonical casing.
    armor_classes: Vec<String>,
    /// Hull classes offered by the selector, canonical casing.
    hull_classes: Vec<String>,
    /// Fixed upper bound of the x axis. Bars scale against this and the
    /// axis is neither zoomable nor pannable.
    axis_max: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let palette = [
            ("light", "#86b341"),
            ("medium", "#e3a949"),
            ("heavy", "#ff5858"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            palette,
            armor_classes: vec!["Light".into(), "Medium".into(), "Heavy".into()],
            hull_classes: vec!["DD".into(), "CL".into(), "CA".into(), "CB".into(), "AE".into()],
            axis_max: 35_000.0,
        }
    }
}

impl ChartStyle {
    /// Build a style with a custom palette and category sets.
    ///
    /// Palette keys are case-folded on the way in; lookups fold too, so
    /// `Light` and `light` resolve identically.
    pub fn new(
        palette: impl IntoIterator<Item = (String, String)>,
        armor_classes: Vec<String>,
        hull_classes: Vec<String>,
        axis_max: f64,
    ) -> Self {
        Self {
            palette: palette
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            armor_classes,
            hull_classes,
            axis_max,
        }
    }

    /// Resolve the bar color for an armor class, case-insensitively.
    /// `None` means the class is outside the configured palette; callers
    /// treat that as fatal rather than guessing a default.
    pub fn color_for(&self, armor: &str) -> Option<&str> {
        self.palette.get(&armor.to_lowercase()).map(String::as_str)
    }

    pub fn armor_classes(&self) -> &[String] {
        &self.armor_classes
    }

    pub fn hull_classes(&self) -> &[String] {
        &self.hull_classes
    }

    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }

    /// Canonical form of a selector value, matched case-insensitively
    /// against the configured classes. Used by selector front ends to
    /// normalize user input before it becomes a filter predicate.
    pub fn canonical_armor(&self, value: &str) -> Option<&str> {
        canonical(&self.armor_classes, value)
    }

    pub fn canonical_hull(&self, value: &str) -> Option<&str> {
        canonical(&self.hull_classes, value)
    }
}

fn canonical<'a>(classes: &'a [String], value: &str) -> Option<&'a str> {
    classes
        .iter()
        .find(|c| c.eq_ignore_ascii_case(value))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_armor_classes() {
        let style = ChartStyle::default();
        assert_eq!(style.color_for("Light"), Some("#86b341"));
        assert_eq!(style.color_for("Medium"), Some("#e3a949"));
        assert_eq!(style.color_for("Heavy"), Some("#ff5858"));
    }

    #[test]
    fn color_lookup_is_case_insensitive() {
        let style = ChartStyle::default();
        assert_eq!(style.color_for("light"), style.color_for("LIGHT"));
        assert!(style.color_for("light").is_some());
    }

    #[test]
    fn unknown_armor_has_no_color() {
        assert_eq!(ChartStyle::default().color_for("Adamantium"), None);
    }

    #[test]
    fn substitute_palette_is_respected() {
        let style = ChartStyle::new(
            [("Shielded".to_string(), "#123456".to_string())],
            vec!["Shielded".into()],
            vec!["BB".into()],
            1_000.0,
        );
        assert_eq!(style.color_for("shielded"), Some("#123456"));
        assert_eq!(style.color_for("Light"), None);
        assert_eq!(style.axis_max(), 1_000.0);
    }

    #[test]
    fn canonical_selector_values_fold_case() {
        let style = ChartStyle::default();
        assert_eq!(style.canonical_armor("heavy"), Some("Heavy"));
        assert_eq!(style.canonical_hull("dd"), Some("DD"));
        assert_eq!(style.canonical_armor("Titanium"), None);
    }
}
