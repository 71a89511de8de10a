//! Pilgrimage circuit model: a named, ordered itinerary of temple stops.

use crate::geo::{self, Coordinates};
use serde::{Deserialize, Serialize};

/// One stop on a circuit. Order within [`Circuit::stops`] is the visiting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitStop {
    pub name: String,
    #[serde(default)]
    pub tamil_name: Option<String>,
    /// Locality label shown on the itinerary
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sequence_order: Option<u32>,
}

impl CircuitStop {
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
}

/// A named ordered itinerary grouping multiple temples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tamil_name: Option<String>,
    /// Category tag, e.g. "navagraha", "arupadai_veedu"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Visiting order is significant
    #[serde(default, alias = "temples")]
    pub stops: Vec<CircuitStop>,
    /// Must match `stops.len()`; normalized by the store on load
    #[serde(default)]
    pub stop_count: Option<usize>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    /// Published estimate; [`Circuit::distance_km`] recomputes from stops
    #[serde(default)]
    pub total_distance_km: Option<f64>,
}

impl Circuit {
    /// Total haversine distance over consecutive stops with coordinates.
    /// Stops without a coordinate are skipped, the chain continues from the
    /// last located stop.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let located: Vec<Coordinates> = self
            .stops
            .iter()
            .filter_map(CircuitStop::coordinates)
            .collect();
        located
            .windows(2)
            .map(|pair| geo::distance_km(&pair[0], &pair[1]))
            .sum()
    }
}
