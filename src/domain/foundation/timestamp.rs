//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Formats as `YYYY-MM-DD HH:MM`, the layout used on assessment reports.
    pub fn to_minute_string(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Formats as RFC 3339.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Timestamp {
        serde_json::from_str("\"2024-01-15T10:30:45Z\"").unwrap()
    }

    #[test]
    fn now_is_ordered_after_earlier_timestamps() {
        assert!(fixed() < Timestamp::now());
    }

    #[test]
    fn minute_string_drops_seconds() {
        assert_eq!(fixed().to_minute_string(), "2024-01-15 10:30");
    }

    #[test]
    fn rfc3339_keeps_date() {
        assert!(fixed().to_rfc3339().starts_with("2024-01-15T10:30:45"));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert!(json.starts_with("\"2024-01-15T10:30:45"));
    }
}
