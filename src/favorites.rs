//! Favorites store
//!
//! Persists the set of favorited temple ids as a JSON-encoded ordered list
//! under a single key in a `fjall` keyspace. Corrupt stored data is not an
//! error: the set silently resets to empty.

use anyhow::{Context, Result};
use fjall::Keyspace;
use std::path::Path;
use tracing::{debug, warn};

const FAVORITES_KEY: &str = "temple_favorites";

/// Durable set of favorited temple identifiers
pub struct FavoritesStore {
    store: Keyspace,
    ids: Vec<String>,
}

impl FavoritesStore {
    /// Open (or create) the favorites keyspace at `path` and load the
    /// persisted set. Deserialization failures reset to an empty set.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = fjall::Database::builder(&path)
            .open()
            .with_context(|| "Failed to open favorites database")?;
        let store = db
            .keyspace("favorites", fjall::KeyspaceCreateOptions::default)
            .with_context(|| "Failed to open favorites keyspace")?;

        let ids = match store.get(FAVORITES_KEY.as_bytes()) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<String>>(&bytes) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!("Corrupt favorites data, resetting to empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {e}");
                Vec::new()
            }
        };

        debug!("Loaded {} favorite temples", ids.len());
        Ok(Self { store, ids })
    }

    /// Whether a temple id is currently favorited
    #[must_use]
    pub fn is_favorite(&self, temple_id: &str) -> bool {
        self.ids.iter().any(|id| id == temple_id)
    }

    /// Toggle membership for a temple id, persisting the full set, and
    /// return the new membership state (`true` = now favorited).
    pub fn toggle_favorite(&mut self, temple_id: &str) -> Result<bool> {
        let now_favorite = if self.is_favorite(temple_id) {
            self.ids.retain(|id| id != temple_id);
            false
        } else {
            self.ids.push(temple_id.to_string());
            true
        };

        self.persist()?;
        debug!(
            "Temple {temple_id} {} favorites",
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    /// Favorited ids in insertion order
    #[must_use]
    pub fn favorites(&self) -> &[String] {
        &self.ids
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.ids)
            .with_context(|| "Failed to serialize favorites")?;
        self.store
            .insert(FAVORITES_KEY.as_bytes(), bytes)
            .with_context(|| "Failed to persist favorites")?;
        Ok(())
    }
}
