//! Application state and high-level operations
//!
//! [`TempleGuideApp`] is constructed once at startup and passed by reference
//! to whatever needs it; there is no ambient global. It owns the read-only
//! temple store, the mutable favorites store, the configuration and the
//! optional user location, and returns plain data for a presentation layer
//! to render.

use crate::config::TempleGuideConfig;
use crate::favorites::FavoritesStore;
use crate::festivals::{self, FestivalOccurrence};
use crate::geo::Coordinates;
use crate::links;
use crate::loader::DatasetLoader;
use crate::models::{Circuit, DeityCategory, Temple};
use crate::query::{QueryEngine, TempleFilter};
use crate::store::TempleStore;
use anyhow::{Context, Result};
use tracing::info;

/// Result of a search-style operation: either the curated default view (no
/// usable query / no location) or actual matches, which may be empty.
#[derive(Debug, Clone)]
pub enum SearchResponse {
    /// Curated default list shown when there is nothing to match against
    Default(Vec<Temple>),
    /// Temples matching the query; an empty list is a real "no results"
    Matches(Vec<Temple>),
}

impl SearchResponse {
    #[must_use]
    pub fn temples(&self) -> &[Temple] {
        match self {
            SearchResponse::Default(temples) | SearchResponse::Matches(temples) => temples,
        }
    }
}

/// Result of cross-filtering temples by a festival name
#[derive(Debug, Clone)]
pub enum FestivalTemples {
    /// The festival maps to a deity category; temples of that category
    ByDeity {
        category: DeityCategory,
        temples: Vec<Temple>,
    },
    /// No category could be inferred; the festival is celebrated across
    /// temples generally and no filtered list applies
    CelebratedEverywhere,
}

/// Application state object holding all loaded data and session state
pub struct TempleGuideApp {
    config: TempleGuideConfig,
    store: TempleStore,
    favorites: FavoritesStore,
    user_location: Option<Coordinates>,
}

impl TempleGuideApp {
    /// Assemble an application from already-built parts
    #[must_use]
    pub fn new(config: TempleGuideConfig, store: TempleStore, favorites: FavoritesStore) -> Self {
        Self {
            config,
            store,
            favorites,
            user_location: None,
        }
    }

    /// Load the dataset and favorites according to configuration. A missing
    /// or broken dataset leaves the store empty rather than failing.
    pub async fn load(config: TempleGuideConfig) -> Result<Self> {
        let dataset = DatasetLoader::load(&config.data).await;
        let store = TempleStore::from_dataset(dataset);
        if store.is_empty() {
            info!("Starting with an empty temple directory");
        }

        let favorites = FavoritesStore::open(config.storage_dir())
            .with_context(|| "Failed to open favorites storage")?;

        Ok(Self::new(config, store, favorites))
    }

    #[must_use]
    pub fn store(&self) -> &TempleStore {
        &self.store
    }

    /// Curated default list: featured temples first, then one temple per
    /// district for variety, deduplicated and capped.
    #[must_use]
    pub fn featured(&self) -> Vec<Temple> {
        let mut temples: Vec<Temple> =
            self.store.featured_temples().iter().take(5).cloned().collect();

        let mut seen_districts: Vec<&str> = Vec::new();
        for temple in self.store.all_temples() {
            if seen_districts.len() >= 5 {
                break;
            }
            if let Some(district) = temple.district.as_deref() {
                if !seen_districts.contains(&district) {
                    seen_districts.push(district);
                    temples.push(temple.clone());
                }
            }
        }

        let mut temples = QueryEngine::dedupe_by_id(temples);
        temples.truncate(self.config.defaults.featured_count);
        temples
    }

    /// Free-text search. Blank input is an explicit "no query" and yields
    /// the curated default list, distinct from an empty match set.
    #[must_use]
    pub fn search(&self, input: &str) -> SearchResponse {
        if input.trim().is_empty() {
            return SearchResponse::Default(self.featured());
        }

        let mut matches: Vec<Temple> = QueryEngine::search(input, self.store.all_temples())
            .into_iter()
            .cloned()
            .collect();
        matches.truncate(self.config.defaults.max_results);
        SearchResponse::Matches(matches)
    }

    /// Apply filter criteria over the full directory, sorted by distance
    /// where distances are known
    #[must_use]
    pub fn filter(&self, filter: &TempleFilter) -> Vec<Temple> {
        let mut results: Vec<Temple> = QueryEngine::filter(filter, self.store.all_temples())
            .into_iter()
            .cloned()
            .collect();
        QueryEngine::sort_by_distance(&mut results);
        results
    }

    /// Temples of one deity category, capped to the configured result size
    #[must_use]
    pub fn deity_temples(&self, category: DeityCategory) -> Vec<Temple> {
        let mut temples: Vec<Temple> =
            QueryEngine::filter_by_deity(category, self.store.all_temples())
                .into_iter()
                .cloned()
                .collect();
        temples.truncate(self.config.defaults.max_results);
        temples
    }

    /// Record the user's position from a successful geolocation callback
    pub fn set_user_location(&mut self, coords: Coordinates) {
        info!("User location set to {}", coords.format());
        self.user_location = Some(coords);
    }

    /// Forget the user's position (geolocation denied or unavailable)
    pub fn clear_user_location(&mut self) {
        self.user_location = None;
    }

    #[must_use]
    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    /// Temples near the user, sorted ascending by distance. Without a user
    /// location this degrades to the curated default list.
    #[must_use]
    pub fn nearby(&self) -> SearchResponse {
        match &self.user_location {
            Some(origin) => SearchResponse::Matches(QueryEngine::nearby(
                origin,
                self.config.defaults.search_radius_km,
                self.config.defaults.max_results,
                self.store.temples_with_coordinates(),
            )),
            None => {
                info!("No user location available, falling back to featured temples");
                SearchResponse::Default(self.featured())
            }
        }
    }

    #[must_use]
    pub fn is_favorite(&self, temple_id: &str) -> bool {
        self.favorites.is_favorite(temple_id)
    }

    /// Toggle a favorite and persist; returns the new membership state
    pub fn toggle_favorite(&mut self, temple_id: &str) -> Result<bool> {
        self.favorites.toggle_favorite(temple_id)
    }

    /// Favorited temples that still exist in the directory
    #[must_use]
    pub fn favorite_temples(&self) -> Vec<Temple> {
        self.favorites
            .favorites()
            .iter()
            .filter_map(|id| self.store.temple_by_id(id))
            .cloned()
            .collect()
    }

    /// Banner text when festivals fall on the current date
    #[must_use]
    pub fn todays_festival_banner(&self) -> Option<String> {
        let todays = self.store.festival_calendar().festivals_today();
        todays.first().map(festivals::banner_label)
    }

    /// All festivals in a calendar month, sorted by date
    #[must_use]
    pub fn festivals_for_month(&self, year: i32, month: u32) -> Vec<FestivalOccurrence> {
        self.store.festival_calendar().festivals_for_month(year, month)
    }

    /// Temples associated with a festival via the deity keyword heuristic
    #[must_use]
    pub fn temples_for_festival(&self, festival_name: &str) -> FestivalTemples {
        match festivals::infer_deity(festival_name) {
            Some(category) => FestivalTemples::ByDeity {
                category,
                temples: self.deity_temples(category),
            },
            None => FestivalTemples::CelebratedEverywhere,
        }
    }

    #[must_use]
    pub fn temple_by_id(&self, temple_id: &str) -> Option<&Temple> {
        self.store.temple_by_id(temple_id)
    }

    #[must_use]
    pub fn circuits(&self) -> &[Circuit] {
        self.store.circuits()
    }

    #[must_use]
    pub fn circuit_by_id(&self, circuit_id: &str) -> Option<&Circuit> {
        self.store.circuit_by_id(circuit_id)
    }

    /// External map deep link for a temple: coordinates when available,
    /// otherwise a pincode area search
    #[must_use]
    pub fn directions_link(&self, temple: &Temple) -> Option<String> {
        if let Some(coords) = temple.coordinates() {
            return Some(links::directions_link(&coords));
        }
        temple
            .pincode
            .as_deref()
            .map(links::pincode_search_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TempleDataset;

    fn temple(id: &str, name: &str, district: &str, deity: DeityCategory) -> Temple {
        Temple {
            temple_id: id.to_string(),
            name: name.to_string(),
            tamil_name: None,
            district: Some(district.to_string()),
            location: None,
            address: None,
            deity_type: deity,
            main_deity: None,
            goddess: None,
            timings: None,
            phone: None,
            festivals: vec![],
            architectural_style: None,
            historical_period: None,
            latitude: None,
            longitude: None,
            pincode: None,
            distance_km: None,
        }
    }

    fn test_app() -> (TempleGuideApp, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let mut located = temple("TM010", "Aabathsagayeswara Temple", "Thanjavur", DeityCategory::Shiva);
        located.latitude = Some(10.9936);
        located.longitude = Some(79.4816);

        let dataset = TempleDataset {
            all_temples: vec![
                temple("TM001", "Meenakshi Temple", "Madurai", DeityCategory::Shiva),
                temple("TM002", "Ranganathaswamy Temple", "Tiruchirappalli", DeityCategory::Vishnu),
                temple("TM003", "Dhandayuthapani Temple", "Dindigul", DeityCategory::Murugan),
                located.clone(),
            ],
            temples_with_coordinates: vec![located],
            featured_temples: vec![temple("TM001", "Meenakshi Temple", "Madurai", DeityCategory::Shiva)],
            ..Default::default()
        };

        let store = TempleStore::from_dataset(dataset);
        let favorites = FavoritesStore::open(dir.path()).unwrap();
        let app = TempleGuideApp::new(TempleGuideConfig::default(), store, favorites);
        (app, dir)
    }

    #[test]
    fn test_blank_search_returns_default_view() {
        let (app, _dir) = test_app();
        match app.search("  ") {
            SearchResponse::Default(temples) => assert!(!temples.is_empty()),
            SearchResponse::Matches(_) => panic!("blank query must yield the default view"),
        }
    }

    #[test]
    fn test_unmatched_search_is_empty_matches() {
        let (app, _dir) = test_app();
        match app.search("nonexistent temple xyz") {
            SearchResponse::Matches(temples) => assert!(temples.is_empty()),
            SearchResponse::Default(_) => panic!("a real query must not yield the default view"),
        }
    }

    #[test]
    fn test_featured_is_deduplicated() {
        let (app, _dir) = test_app();
        let featured = app.featured();
        let mut ids: Vec<&str> = featured.iter().map(|t| t.temple_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), featured.len());
    }

    #[test]
    fn test_nearby_without_location_falls_back_to_featured() {
        let (app, _dir) = test_app();
        assert!(matches!(app.nearby(), SearchResponse::Default(_)));
    }

    #[test]
    fn test_nearby_with_location_returns_sorted_matches() {
        let (mut app, _dir) = test_app();
        app.set_user_location(Coordinates::new(10.99, 79.48));
        match app.nearby() {
            SearchResponse::Matches(temples) => {
                assert_eq!(temples.len(), 1);
                assert_eq!(temples[0].temple_id, "TM010");
                assert!(temples[0].distance_km.unwrap() < 1.0);
            }
            SearchResponse::Default(_) => panic!("expected nearby matches"),
        }
    }

    #[test]
    fn test_favorite_roundtrip_and_listing() {
        let (mut app, _dir) = test_app();
        assert!(app.toggle_favorite("TM002").unwrap());
        assert!(app.is_favorite("TM002"));
        assert_eq!(app.favorite_temples().len(), 1);

        assert!(!app.toggle_favorite("TM002").unwrap());
        assert!(app.favorite_temples().is_empty());
    }

    #[test]
    fn test_festival_cross_filter() {
        let (app, _dir) = test_app();
        match app.temples_for_festival("Vaikunta Ekadasi") {
            FestivalTemples::ByDeity { category, temples } => {
                assert_eq!(category, DeityCategory::Vishnu);
                assert!(temples.iter().all(|t| t.deity_type == DeityCategory::Vishnu));
            }
            FestivalTemples::CelebratedEverywhere => panic!("expected a Vishnu match"),
        }

        assert!(matches!(
            app.temples_for_festival("Pongal"),
            FestivalTemples::CelebratedEverywhere
        ));
    }

    #[test]
    fn test_directions_link_prefers_coordinates() {
        let (app, _dir) = test_app();
        let located = app.temple_by_id("TM010").unwrap();
        assert!(app.directions_link(located).unwrap().contains("maps/dir"));

        let mut unlocated = temple("TM099", "No GPS", "Salem", DeityCategory::Other);
        unlocated.pincode = Some("636001".to_string());
        assert!(app.directions_link(&unlocated).unwrap().contains("maps/search"));

        unlocated.pincode = None;
        assert!(app.directions_link(&unlocated).is_none());
    }
}
