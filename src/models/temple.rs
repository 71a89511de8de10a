//! Temple record model
//!
//! Field names follow the HRCE-derived dataset JSON. Optional attributes are
//! modeled as `Option` rather than empty-string sentinels, so "absent" and
//! "empty" stay distinguishable.

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// Coarse classification of a temple's primary worshipped form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeityCategory {
    Shiva,
    Vishnu,
    Murugan,
    Devi,
    #[default]
    #[serde(other)]
    Other,
}

impl DeityCategory {
    /// Tamil display label, part of the presentation contract
    #[must_use]
    pub fn tamil_label(&self) -> &'static str {
        match self {
            DeityCategory::Shiva => "சிவன்",
            DeityCategory::Vishnu => "விஷ்ணு",
            DeityCategory::Murugan => "முருகன்",
            DeityCategory::Devi => "அம்மன்",
            DeityCategory::Other => "மற்றவை",
        }
    }

    /// English name as it appears in the dataset
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DeityCategory::Shiva => "Shiva",
            DeityCategory::Vishnu => "Vishnu",
            DeityCategory::Murugan => "Murugan",
            DeityCategory::Devi => "Devi",
            DeityCategory::Other => "Other",
        }
    }

    /// Case-insensitive lookup used by quick-filter inputs
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "shiva" => Some(DeityCategory::Shiva),
            "vishnu" => Some(DeityCategory::Vishnu),
            "murugan" => Some(DeityCategory::Murugan),
            "devi" => Some(DeityCategory::Devi),
            "other" => Some(DeityCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single place-of-worship entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Temple {
    pub temple_id: String,
    pub name: String,
    #[serde(default)]
    pub tamil_name: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Town or locality label
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub deity_type: DeityCategory,
    #[serde(default)]
    pub main_deity: Option<String>,
    #[serde(default)]
    pub goddess: Option<String>,
    #[serde(default)]
    pub timings: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub festivals: Vec<String>,
    #[serde(default)]
    pub architectural_style: Option<String>,
    #[serde(default)]
    pub historical_period: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub pincode: Option<String>,
    /// Distance from the query origin in km. Populated transiently by nearby
    /// queries, never part of the persisted dataset.
    #[serde(default, rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Temple {
    /// Geographic position, present only when both components exist and lie
    /// in valid ranges
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                let coords = Coordinates::new(lat, lon);
                coords.is_valid().then_some(coords)
            }
            _ => None,
        }
    }

    /// Lowercased text blob searched by free-text queries
    #[must_use]
    pub fn search_haystack(&self) -> String {
        let fields: [Option<&str>; 7] = [
            Some(self.name.as_str()),
            self.tamil_name.as_deref(),
            self.district.as_deref(),
            self.address.as_deref(),
            self.main_deity.as_deref(),
            Some(self.deity_type.name()),
            self.pincode.as_deref(),
        ];
        fields
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
