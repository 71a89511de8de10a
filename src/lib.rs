//! `templeguide` - Tamil Nadu temple directory and festival calendar
//!
//! This library provides the core functionality behind the temple guide:
//! free-text and attribute search over the temple directory, nearby lookups
//! by great-circle distance, the festival calendar, pilgrimage circuits and
//! persistent favorites. Rendering is left to a presentation layer that
//! consumes the returned data.

pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod festivals;
pub mod geo;
pub mod links;
pub mod loader;
pub mod models;
pub mod query;
pub mod store;

// Re-export core types for public API
pub use app::{FestivalTemples, SearchResponse, TempleGuideApp};
pub use config::TempleGuideConfig;
pub use error::TempleGuideError;
pub use favorites::FavoritesStore;
pub use festivals::FestivalOccurrence;
pub use geo::{Coordinates, distance_km};
pub use loader::DatasetLoader;
pub use models::{Circuit, DeityCategory, FestivalCalendar, FestivalEntry, Temple, TempleDataset};
pub use query::{QueryEngine, TempleFilter};
pub use store::TempleStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TempleGuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
