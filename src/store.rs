//! In-memory temple store
//!
//! Built once from a [`TempleDataset`] at startup and read-only for the rest
//! of the session.

use crate::models::{Circuit, FestivalCalendar, Temple, TempleDataset};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read-only holder for the loaded dataset
#[derive(Debug, Default)]
pub struct TempleStore {
    all_temples: Vec<Temple>,
    temples_with_coordinates: Vec<Temple>,
    featured_temples: Vec<Temple>,
    festival_calendar: FestivalCalendar,
    circuits: Vec<Circuit>,
    // index into all_temples by temple_id
    index: HashMap<String, usize>,
}

impl TempleStore {
    /// Build a store from a parsed dataset, enforcing record invariants:
    /// temple ids are unique (first occurrence wins) and circuit stop counts
    /// match their stop sequences.
    #[must_use]
    pub fn from_dataset(dataset: TempleDataset) -> Self {
        let mut all_temples: Vec<Temple> = Vec::with_capacity(dataset.all_temples.len());
        let mut index = HashMap::with_capacity(dataset.all_temples.len());

        for temple in dataset.all_temples {
            if index.contains_key(&temple.temple_id) {
                warn!("Duplicate temple id {} dropped from dataset", temple.temple_id);
                continue;
            }
            if temple.latitude.is_some() != temple.longitude.is_some() {
                warn!(
                    "Temple {} has a partial coordinate pair, treating as unlocated",
                    temple.temple_id
                );
            } else if temple.latitude.is_some() && temple.coordinates().is_none() {
                warn!(
                    "Temple {} has out-of-range coordinates, treating as unlocated",
                    temple.temple_id
                );
            }
            index.insert(temple.temple_id.clone(), all_temples.len());
            all_temples.push(temple);
        }

        let circuits = dataset
            .tour_circuits
            .into_iter()
            .map(|mut circuit| {
                let actual = circuit.stops.len();
                if circuit.stop_count.is_some_and(|count| count != actual) {
                    warn!(
                        "Circuit {} declares {} stops but lists {}, normalizing",
                        circuit.id,
                        circuit.stop_count.unwrap_or_default(),
                        actual
                    );
                }
                circuit.stop_count = Some(actual);
                circuit
            })
            .collect();

        let store = Self {
            all_temples,
            temples_with_coordinates: dataset.temples_with_coordinates,
            featured_temples: dataset.featured_temples,
            festival_calendar: dataset.festival_calendar,
            circuits,
            index,
        };

        debug!(
            "Temple store ready: {} temples, {} with coordinates, {} featured, {} circuits",
            store.all_temples.len(),
            store.temples_with_coordinates.len(),
            store.featured_temples.len(),
            store.circuits.len()
        );

        store
    }

    #[must_use]
    pub fn all_temples(&self) -> &[Temple] {
        &self.all_temples
    }

    #[must_use]
    pub fn temples_with_coordinates(&self) -> &[Temple] {
        &self.temples_with_coordinates
    }

    #[must_use]
    pub fn featured_temples(&self) -> &[Temple] {
        &self.featured_temples
    }

    #[must_use]
    pub fn festival_calendar(&self) -> &FestivalCalendar {
        &self.festival_calendar
    }

    #[must_use]
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Look up a temple by id, checking the main list first and the
    /// coordinate subset second. Unknown ids yield `None`, never an error.
    #[must_use]
    pub fn temple_by_id(&self, temple_id: &str) -> Option<&Temple> {
        self.index
            .get(temple_id)
            .map(|&i| &self.all_temples[i])
            .or_else(|| {
                self.temples_with_coordinates
                    .iter()
                    .find(|temple| temple.temple_id == temple_id)
            })
    }

    /// Look up a circuit by id; unknown ids yield `None`
    #[must_use]
    pub fn circuit_by_id(&self, circuit_id: &str) -> Option<&Circuit> {
        self.circuits.iter().find(|circuit| circuit.id == circuit_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_temples.is_empty() && self.temples_with_coordinates.is_empty()
    }
}
