//! Picker configuration loaded from JSON.

use crate::catalog::CatalogOptions;
use crate::error::{RangeError, Result};
use crate::selection::DEFAULT_RANGE_COLORS;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Host-level settings for a defined-range picker. Every field is optional
/// in the JSON source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PickerConfig {
    /// First day of the week for "This Week"/"Last Week" ("sun", "mon", ...)
    pub week_starts_on: Weekday,
    /// Colors applied by range position when a range has no own color
    pub range_colors: Vec<String>,
    pub focus_next_range_on_defined_range_click: bool,
    pub restrict_to_first_range_length: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            week_starts_on: Weekday::Sun,
            range_colors: DEFAULT_RANGE_COLORS.iter().map(|c| c.to_string()).collect(),
            focus_next_range_on_defined_range_click: false,
            restrict_to_first_range_length: false,
        }
    }
}

impl PickerConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        let config: PickerConfig = serde_json::from_str(source)?;
        if let Some(pos) = config.range_colors.iter().position(|c| c.trim().is_empty()) {
            return Err(RangeError::EmptyColor(pos));
        }
        log::debug!(
            "Loaded picker config: week starts {:?}, {} colors",
            config.week_starts_on,
            config.range_colors.len()
        );
        Ok(config)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            week_starts_on: self.week_starts_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.range_colors, vec!["#3d91ff", "#3ecf8e", "#fed14c"]);
        assert_eq!(config.week_starts_on, Weekday::Sun);
    }

    #[test]
    fn test_overrides() {
        let config = PickerConfig::from_json(
            r##"{
                "week_starts_on": "mon",
                "range_colors": ["#000000"],
                "restrict_to_first_range_length": true
            }"##,
        )
        .unwrap();
        assert_eq!(config.week_starts_on, Weekday::Mon);
        assert_eq!(config.range_colors, vec!["#000000"]);
        assert!(config.restrict_to_first_range_length);
        assert!(!config.focus_next_range_on_defined_range_click);
        assert_eq!(config.catalog_options().week_starts_on, Weekday::Mon);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            PickerConfig::from_json("{\"week_starts_on\": \"someday\"}"),
            Err(RangeError::Config(_))
        ));
        assert!(matches!(
            PickerConfig::from_json("{\"range_colors\": [\"#fff\", \" \"]}"),
            Err(RangeError::EmptyColor(1))
        ));
    }
}
