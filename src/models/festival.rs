//! Festival dataset model
//!
//! The dataset groups dated festival entries by ritual category (pradosham,
//! ekadashi, pournami, amavasya, ...) plus a flat list of major annual
//! festivals. Categories live in a `BTreeMap` so iteration order is
//! deterministic regardless of JSON key order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dated ritual or celebration event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalEntry {
    /// Gregorian calendar date
    pub date: NaiveDate,
    /// Weekday label as published in the panchangam tables
    #[serde(default)]
    pub day: Option<String>,
    /// Ritual type, e.g. "Soma Pradosham" (doubles as display name)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Festival name, used by major annual entries
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tamil_name: Option<String>,
    /// Traditional Tamil solar month, e.g. "Thai", "Margazhi"
    #[serde(default)]
    pub tamil_month: Option<String>,
    /// Span in days for multi-day festivals such as Navaratri
    #[serde(default)]
    pub duration: Option<u32>,
}

impl FestivalEntry {
    /// Display name: the ritual type when present, otherwise the name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.kind
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Festival dataset: per-category entries plus major annual festivals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FestivalCalendar {
    #[serde(default)]
    pub festivals: BTreeMap<String, Vec<FestivalEntry>>,
    #[serde(default)]
    pub major_annual_festivals: Vec<FestivalEntry>,
}

impl FestivalCalendar {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.festivals.values().all(Vec::is_empty) && self.major_annual_festivals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_type() {
        let entry: FestivalEntry = serde_json::from_str(
            r#"{"date": "2025-01-11", "day": "Saturday", "type": "Shani Pradosham", "tamil_month": "Thai"}"#,
        )
        .unwrap();
        assert_eq!(entry.display_name(), "Shani Pradosham");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let entry = FestivalEntry {
            date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            day: None,
            kind: None,
            name: Some("Pongal".to_string()),
            tamil_name: None,
            tamil_month: Some("Thai".to_string()),
            duration: None,
        };
        assert_eq!(entry.display_name(), "Pongal");
    }

    #[test]
    fn test_empty_calendar_from_missing_keys() {
        let cal: FestivalCalendar = serde_json::from_str("{}").unwrap();
        assert!(cal.is_empty());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result: Result<FestivalEntry, _> =
            serde_json::from_str(r#"{"date": "2025-13-40", "type": "Pradosham"}"#);
        assert!(result.is_err());
    }
}
