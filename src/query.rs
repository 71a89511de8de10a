//! Query engine: text search, attribute filters and nearby lookups over the
//! in-memory temple list.
//!
//! All operations are pure over their inputs and never fail; an empty result
//! is an ordinary value. Blank-query handling (default/featured view) lives
//! in the application layer.

use crate::geo::{self, Coordinates};
use crate::models::{DeityCategory, Temple};
use std::collections::HashSet;
use tracing::debug;

/// Conjunctive filter criteria. An absent criterion (None, empty string or
/// empty set) places no constraint on that dimension.
#[derive(Debug, Clone, Default)]
pub struct TempleFilter {
    /// District equality
    pub district: Option<String>,
    /// Deity category membership
    pub deity_types: Vec<DeityCategory>,
    /// Maximum transient distance in km; temples without a computed distance
    /// sort as infinitely far and fail this criterion when it is set
    pub max_distance_km: Option<f64>,
    /// Historical period equality
    pub period: Option<String>,
}

impl TempleFilter {
    fn matches(&self, temple: &Temple) -> bool {
        if let Some(district) = self.district.as_deref() {
            if !district.is_empty() && temple.district.as_deref() != Some(district) {
                return false;
            }
        }

        if !self.deity_types.is_empty() && !self.deity_types.contains(&temple.deity_type) {
            return false;
        }

        if let Some(max) = self.max_distance_km {
            if temple.distance_km.unwrap_or(f64::INFINITY) > max {
                return false;
            }
        }

        if let Some(period) = self.period.as_deref() {
            if !period.is_empty() && temple.historical_period.as_deref() != Some(period) {
                return false;
            }
        }

        true
    }
}

/// Temple query operations
pub struct QueryEngine;

impl QueryEngine {
    /// Free-text search. Every whitespace-separated term of the lowercased
    /// query must appear somewhere in the temple's searchable text (name,
    /// Tamil name, district, address, main deity, deity category, pincode).
    /// A blank query matches nothing; callers wanting a default view handle
    /// that case before reaching here.
    #[must_use]
    pub fn search<'a>(query: &str, temples: &'a [Temple]) -> Vec<&'a Temple> {
        let query = query.trim().to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let results: Vec<&Temple> = temples
            .iter()
            .filter(|temple| {
                let haystack = temple.search_haystack();
                terms.iter().all(|term| haystack.contains(term))
            })
            .collect();

        debug!("Search '{query}' matched {} temples", results.len());
        results
    }

    /// Temples whose deity category equals the requested category
    #[must_use]
    pub fn filter_by_deity<'a>(category: DeityCategory, temples: &'a [Temple]) -> Vec<&'a Temple> {
        temples
            .iter()
            .filter(|temple| temple.deity_type == category)
            .collect()
    }

    /// Apply conjunctive filter criteria, preserving input order
    #[must_use]
    pub fn filter<'a>(filter: &TempleFilter, temples: &'a [Temple]) -> Vec<&'a Temple> {
        temples.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Temples with valid coordinates within `radius_km` of `origin`, sorted
    /// ascending by distance and truncated to `limit`. Each returned record
    /// carries its computed distance. Records without coordinates are
    /// excluded.
    #[must_use]
    pub fn nearby(
        origin: &Coordinates,
        radius_km: f64,
        limit: usize,
        temples: &[Temple],
    ) -> Vec<Temple> {
        let mut results: Vec<Temple> = temples
            .iter()
            .filter_map(|temple| {
                let coords = temple.coordinates()?;
                let distance = geo::distance_km(origin, &coords);
                (distance <= radius_km).then(|| {
                    let mut found = temple.clone();
                    found.distance_km = Some(distance);
                    found
                })
            })
            .collect();

        Self::sort_by_distance(&mut results);
        results.truncate(limit);

        debug!(
            "Nearby query at {} within {radius_km}km returned {} temples",
            origin.format(),
            results.len()
        );
        results
    }

    /// Stable ascending sort by transient distance. Temples without a
    /// distance sort last (treated as infinitely far).
    pub fn sort_by_distance(temples: &mut [Temple]) {
        temples.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
        });
    }

    /// Drop repeated temple ids, keeping the first occurrence in order
    #[must_use]
    pub fn dedupe_by_id(temples: Vec<Temple>) -> Vec<Temple> {
        let mut seen = HashSet::new();
        temples
            .into_iter()
            .filter(|temple| seen.insert(temple.temple_id.clone()))
            .collect()
    }
}
