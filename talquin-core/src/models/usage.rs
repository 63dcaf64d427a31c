//! Usage-related types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily electricity consumption reading.
///
/// Entries are plain value objects: two entries are equal when both fields
/// are equal, and a series of entries carries no identity beyond its order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// When the reading was taken (UTC, whole-second precision).
    #[serde(rename = "date_time")]
    pub date: DateTime<Utc>,

    /// Energy consumed, in kWh.
    #[serde(rename = "value")]
    pub usage: f64,
}

impl UsageEntry {
    /// Creates a new usage entry.
    pub fn new(date: DateTime<Utc>, usage: f64) -> Self {
        Self { date, usage }
    }
}

impl fmt::Display for UsageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{day: {}, kWh: {}}}", self.date, self.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_wire_names() {
        let entry: UsageEntry =
            serde_json::from_str(r#"{"date_time": "2021-01-20T17:00:00Z", "value": 1.0}"#).unwrap();

        assert_eq!(entry.date, Utc.with_ymd_and_hms(2021, 1, 20, 17, 0, 0).unwrap());
        assert_eq!(entry.usage, 1.0);
    }

    #[test]
    fn test_structural_equality() {
        let date = Utc.with_ymd_and_hms(2021, 1, 20, 17, 0, 0).unwrap();
        assert_eq!(UsageEntry::new(date, 1.0), UsageEntry::new(date, 1.0));
        assert_ne!(UsageEntry::new(date, 1.0), UsageEntry::new(date, 2.0));
    }

    #[test]
    fn test_display() {
        let entry = UsageEntry::new(Utc.with_ymd_and_hms(2021, 1, 20, 17, 0, 0).unwrap(), 1.5);
        assert_eq!(entry.to_string(), "{day: 2021-01-20 17:00:00 UTC, kWh: 1.5}");
    }
}
