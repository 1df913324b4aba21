//! Access time formatting

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// Clock style for access times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// "3:15 PM"
    #[default]
    TwelveHour,
    /// "15:15"
    TwentyFourHour,
}

impl TimeFormat {
    fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%-I:%M %p",
            TimeFormat::TwentyFourHour => "%H:%M",
        }
    }

    /// Format an instant in its own time zone
    pub fn format<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format(self.pattern()).to_string()
    }

    /// Format epoch milliseconds in the given zone
    ///
    /// Returns an empty string for timestamps chrono cannot represent.
    pub fn format_millis(&self, millis: i64, zone: &FixedOffset) -> String {
        match zone.timestamp_millis_opt(millis).single() {
            Some(at) => self.format(&at),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour() {
        let zone = FixedOffset::east_opt(0).unwrap();
        let at = zone.with_ymd_and_hms(2024, 3, 10, 15, 15, 0).unwrap();
        assert_eq!(TimeFormat::TwelveHour.format(&at), "3:15 PM");

        let morning = zone.with_ymd_and_hms(2024, 3, 10, 9, 5, 0).unwrap();
        assert_eq!(TimeFormat::TwelveHour.format(&morning), "9:05 AM");
    }

    #[test]
    fn test_twenty_four_hour_with_offset() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        // 13:15 UTC is 15:15 at UTC+2
        let millis = chrono::Utc
            .with_ymd_and_hms(2024, 3, 10, 13, 15, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(TimeFormat::TwentyFourHour.format_millis(millis, &zone), "15:15");
    }
}
