//! Usage history and the per-group last-access records derived from it

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Last access of one permission group by one app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUsage {
    /// Platform group name
    pub group_name: String,
    /// Epoch milliseconds, 0 when never accessed
    #[serde(default)]
    pub last_access_time: i64,
}

impl GroupUsage {
    /// Create a usage entry
    pub fn new(group_name: impl Into<String>, last_access_time: i64) -> Self {
        Self {
            group_name: group_name.into(),
            last_access_time,
        }
    }
}

/// Usage report for one app as delivered by the usage source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPermissionUsage {
    /// Package the report belongs to
    pub package_name: String,
    /// Per-group usage
    #[serde(default)]
    pub group_usages: Vec<GroupUsage>,
}

impl AppPermissionUsage {
    /// Create a report
    pub fn new(package_name: impl Into<String>, group_usages: Vec<GroupUsage>) -> Self {
        Self {
            package_name: package_name.into(),
            group_usages,
        }
    }
}

/// Start of the lookback window in epoch milliseconds, clamped at the epoch
pub fn lookback_begin_millis<Tz: TimeZone>(now: &DateTime<Tz>, lookback_days: u32) -> i64 {
    let begin = now.timestamp_millis() - Duration::days(i64::from(lookback_days)).num_milliseconds();
    begin.max(0)
}

/// Group name to last-access time, restricted to the lookback window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageRecords {
    last_access: HashMap<String, i64>,
}

impl UsageRecords {
    /// Create empty records
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract records for `package_name` from a batch of usage reports
    ///
    /// Reports for other packages, zero timestamps and timestamps before
    /// `begin_millis` are dropped.
    pub fn extract(usages: &[AppPermissionUsage], package_name: &str, begin_millis: i64) -> Self {
        let mut records = Self::new();
        records.rebuild(usages, package_name, begin_millis);
        records
    }

    /// Clear and refill from a batch of usage reports
    pub fn rebuild(&mut self, usages: &[AppPermissionUsage], package_name: &str, begin_millis: i64) {
        self.last_access.clear();

        for app in usages.iter().filter(|u| u.package_name == package_name) {
            for usage in &app.group_usages {
                if usage.last_access_time == 0 || usage.last_access_time < begin_millis {
                    continue;
                }
                self.last_access
                    .insert(usage.group_name.clone(), usage.last_access_time);
            }
        }

        tracing::debug!(
            "Extracted {} usage records for {}",
            self.last_access.len(),
            package_name
        );
    }

    /// Insert a single record
    pub fn insert(&mut self, group_name: impl Into<String>, last_access_millis: i64) {
        self.last_access.insert(group_name.into(), last_access_millis);
    }

    /// Last access time of a group, if recorded
    pub fn last_access(&self, group_name: &str) -> Option<i64> {
        self.last_access.get(group_name).copied()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.last_access.len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.last_access.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const PKG: &str = "com.example.maps";

    #[test]
    fn test_extract_filters_package_zero_and_old() {
        let usages = vec![
            AppPermissionUsage::new(
                PKG,
                vec![
                    GroupUsage::new("CAMERA", 5_000),
                    GroupUsage::new("LOCATION", 0),
                    GroupUsage::new("MICROPHONE", 999),
                ],
            ),
            AppPermissionUsage::new("com.other", vec![GroupUsage::new("CONTACTS", 6_000)]),
        ];

        let records = UsageRecords::extract(&usages, PKG, 1_000);

        assert_eq!(records.len(), 1);
        assert_eq!(records.last_access("CAMERA"), Some(5_000));
        assert_eq!(records.last_access("LOCATION"), None);
        assert_eq!(records.last_access("MICROPHONE"), None);
        assert_eq!(records.last_access("CONTACTS"), None);
    }

    #[test]
    fn test_rebuild_clears_stale_entries() {
        let mut records = UsageRecords::new();
        records.insert("SMS", 10_000);

        records.rebuild(&[], PKG, 0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_lookback_begin_clamped_at_epoch() {
        let early = Utc.timestamp_millis_opt(1_000).unwrap();
        assert_eq!(lookback_begin_millis(&early, 1), 0);

        let later = Utc.timestamp_millis_opt(200_000_000).unwrap();
        assert_eq!(lookback_begin_millis(&later, 1), 200_000_000 - 86_400_000);
    }
}
