//! Dataset loading
//!
//! Loads the temple dataset from a local JSON document or, when none is
//! available, fetches it once from a hosted URL. A failed load is never
//! fatal: the caller receives an empty dataset and the directory starts
//! empty.

use crate::config::DataConfig;
use crate::models::TempleDataset;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Service for loading the temple dataset
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset according to configuration. Tries the local file
    /// first, then the hosted URL. Every failure degrades to an empty
    /// dataset.
    pub async fn load(config: &DataConfig) -> TempleDataset {
        let path = Path::new(&config.dataset_path);
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(dataset) => return dataset,
                Err(e) => warn!("Failed to load dataset from {}: {e:#}", path.display()),
            }
        } else {
            debug!("No local dataset at {}", path.display());
        }

        if let Some(url) = &config.dataset_url {
            let timeout = Duration::from_secs(u64::from(config.fetch_timeout_seconds));
            match Self::fetch_from_url(url, timeout).await {
                Ok(dataset) => return dataset,
                Err(e) => warn!("Failed to fetch dataset from {url}: {e:#}"),
            }
        }

        warn!("No temple dataset available, starting with an empty directory");
        TempleDataset::default()
    }

    /// Parse a dataset from a local JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<TempleDataset> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
        let dataset: TempleDataset = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset file {}", path.display()))?;
        info!(
            "Loaded {} temples ({} with coordinates) from {}",
            dataset.all_temples.len(),
            dataset.temples_with_coordinates.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Fetch a dataset from a hosted JSON document, one-shot with a timeout
    pub async fn fetch_from_url(url: &str, timeout: Duration) -> Result<TempleDataset> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Dataset request to {url} failed"))?;

        let dataset: TempleDataset = response
            .json()
            .await
            .with_context(|| "Failed to parse dataset response")?;

        info!(
            "Fetched {} temples ({} with coordinates) from {url}",
            dataset.all_temples.len(),
            dataset.temples_with_coordinates.len()
        );
        Ok(dataset)
    }
}
