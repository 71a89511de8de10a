//! Top-level dataset document shape.

use crate::models::circuit::Circuit;
use crate::models::festival::FestivalCalendar;
use crate::models::temple::Temple;
use serde::{Deserialize, Serialize};

/// The bundled temple dataset. Every key is optional in the JSON document and
/// defaults to an empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TempleDataset {
    #[serde(default)]
    pub all_temples: Vec<Temple>,
    #[serde(default)]
    pub temples_with_coordinates: Vec<Temple>,
    #[serde(default)]
    pub featured_temples: Vec<Temple>,
    #[serde(default)]
    pub festival_calendar: FestivalCalendar,
    #[serde(default)]
    pub tour_circuits: Vec<Circuit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dataset: TempleDataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.all_temples.is_empty());
        assert!(dataset.temples_with_coordinates.is_empty());
        assert!(dataset.featured_temples.is_empty());
        assert!(dataset.festival_calendar.is_empty());
        assert!(dataset.tour_circuits.is_empty());
    }

    #[test]
    fn test_partial_document_parses() {
        let json = r#"{
            "all_temples": [{"temple_id": "TM001", "name": "Test Temple", "deity_type": "Shiva"}]
        }"#;
        let dataset: TempleDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.all_temples.len(), 1);
        assert!(dataset.featured_temples.is_empty());
    }
}
