//! Screen configuration
//!
//! Configuration for one app permissions screen. Loadable from JSON; every
//! field has a default so a partial file is enough.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{ScreenError, ScreenResult};
use crate::locale::{SummaryStrings, TimeFormat};
use crate::permissions::SENSOR_GROUPS;

const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Configuration for an app permissions screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Clock style for access times
    #[serde(default)]
    pub time_format: TimeFormat,

    /// Local time zone as minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// How far back usage history is kept
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// Groups reported with today/yesterday precision
    #[serde(default = "default_sensor_groups")]
    pub sensor_groups: Vec<String>,

    /// Message table
    #[serde(default)]
    pub strings: SummaryStrings,
}

fn default_lookback_days() -> u32 {
    1
}

fn default_sensor_groups() -> Vec<String> {
    SENSOR_GROUPS.iter().map(|g| g.to_string()).collect()
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            utc_offset_minutes: 0,
            lookback_days: default_lookback_days(),
            sensor_groups: default_sensor_groups(),
            strings: SummaryStrings::default(),
        }
    }
}

impl ScreenConfig {
    /// Create the default configuration (UTC, 12-hour clock)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ScreenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded screen config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> ScreenResult<()> {
        if self.lookback_days == 0 {
            return Err(ScreenError::invalid_config("lookback_days must be at least 1"));
        }
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ScreenError::invalid_config(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// Set the clock style
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Set the local time zone offset
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Replace the message table
    pub fn with_strings(mut self, strings: SummaryStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Local time zone, UTC if the offset is out of range
    pub fn time_zone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid UTC offset {} minutes, using UTC",
                self.utc_offset_minutes
            );
            Utc.fix()
        })
    }

    /// Whether a group gets today/yesterday precision
    pub fn is_sensor_group(&self, group_name: &str) -> bool {
        self.sensor_groups.iter().any(|g| g == group_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScreenConfig::new();
        assert_eq!(config.lookback_days, 1);
        assert!(config.is_sensor_group(crate::permissions::CAMERA));
        assert!(!config.is_sensor_group("android.permission-group.CONTACTS"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"time_format": "twenty_four_hour", "utc_offset_minutes": 120}}"#
        )
        .unwrap();

        let config = ScreenConfig::from_file(file.path()).unwrap();
        assert_eq!(config.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(config.time_zone().local_minus_utc(), 7200);
        assert_eq!(config.sensor_groups.len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ScreenConfig {
            lookback_days: 0,
            ..ScreenConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScreenError::InvalidConfig(_))));

        let config = ScreenConfig::new().with_utc_offset_minutes(24 * 60);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = ScreenConfig::from_file("/nonexistent/screen.json").unwrap_err();
        assert!(matches!(err, ScreenError::Io(_)));
    }
}
