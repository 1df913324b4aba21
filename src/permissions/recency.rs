//! Recency classification of a group's last access

use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};

/// How recently a permission group was used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyClass {
    /// Sensor group used since local midnight
    SensorToday,
    /// Sensor group used in the last 24 hours, before local midnight
    SensorYesterday,
    /// Non-sensor group used in the last 24 hours
    ContentProviderRecent,
    /// No use in the last 24 hours
    NotRecent,
}

impl RecencyClass {
    /// Whether the group was used inside the window at all
    pub fn is_recent(&self) -> bool {
        !matches!(self, RecencyClass::NotRecent)
    }
}

impl std::fmt::Display for RecencyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecencyClass::SensorToday => write!(f, "Sensor today"),
            RecencyClass::SensorYesterday => write!(f, "Sensor yesterday"),
            RecencyClass::ContentProviderRecent => write!(f, "Recent"),
            RecencyClass::NotRecent => write!(f, "Not recent"),
        }
    }
}

/// Epoch milliseconds of midnight at the start of `now`'s local day
pub fn local_midnight_millis<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let naive_midnight = now.date_naive().and_time(NaiveTime::default());

    match now.timezone().from_local_datetime(&naive_midnight).earliest() {
        Some(midnight) => midnight.timestamp_millis(),
        // Midnight skipped by a DST jump; use the current offset
        None => (naive_midnight - now.offset().fix())
            .and_utc()
            .timestamp_millis(),
    }
}

/// Classify a last-access timestamp relative to `now`
pub fn classify<Tz: TimeZone>(
    now: &DateTime<Tz>,
    last_access_millis: Option<i64>,
    is_sensor: bool,
) -> RecencyClass {
    let Some(last_access) = last_access_millis else {
        return RecencyClass::NotRecent;
    };

    let window_begin = now.timestamp_millis() - Duration::hours(24).num_milliseconds();
    if last_access < window_begin {
        return RecencyClass::NotRecent;
    }

    if !is_sensor {
        return RecencyClass::ContentProviderRecent;
    }

    if last_access >= local_midnight_millis(now) {
        RecencyClass::SensorToday
    } else {
        RecencyClass::SensorYesterday
    }
}
