/*!
 * Sign clip datasets.
 *
 * A dataset maps canonical glosses to video clip locations. Datasets are
 * immutable once constructed and are swapped wholesale: the playback
 * subsystem snapshots the active dataset when a sequence starts, so a
 * hot-swap never affects a sequence already in flight.
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// File extensions recognized when scanning a clip directory
const CLIP_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "mkv"];

/// An immutable mapping from gloss to clip location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Human-readable dataset name
    pub name: String,

    /// Optional prefix applied to every clip path
    #[serde(rename = "baseUrl", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Gloss to relative clip path
    pub videos: HashMap<String, String>,
}

impl Dataset {
    /// Create a dataset from parts, validating that it is non-empty.
    pub fn new(
        name: impl Into<String>,
        base_url: Option<String>,
        videos: HashMap<String, String>,
    ) -> Result<Self> {
        let dataset = Self {
            name: name.into(),
            base_url,
            videos,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Validate the dataset definition.
    pub fn validate(&self) -> Result<()> {
        if self.videos.is_empty() {
            return Err(anyhow!("Dataset '{}' contains no video mappings", self.name));
        }
        Ok(())
    }

    /// Resolve the clip locator for a gloss.
    ///
    /// The locator is `base_url + path` when a base URL is configured,
    /// otherwise the mapped path verbatim. Lookup is exact on the
    /// canonical uppercase gloss.
    pub fn clip_locator(&self, gloss: &str) -> Option<String> {
        self.videos.get(gloss).map(|path| match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => path.clone(),
        })
    }

    /// Whether the dataset has a clip for the gloss
    pub fn contains(&self, gloss: &str) -> bool {
        self.videos.contains_key(gloss)
    }

    /// Number of gloss mappings
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the dataset has no mappings
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Parse a dataset from its JSON definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).context("Failed to parse dataset JSON")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset definition from a local JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
        let dataset = Self::from_json(&content)?;
        info!(
            "Loaded dataset '{}' with {} clips from {:?}",
            dataset.name,
            dataset.len(),
            path
        );
        Ok(dataset)
    }

    /// Fetch a dataset definition from a remote JSON endpoint.
    pub async fn from_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).with_context(|| format!("Invalid dataset URL: {}", url))?;

        let response = reqwest::get(parsed)
            .await
            .with_context(|| format!("Failed to fetch dataset from {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Dataset endpoint responded with status {} for {}",
                response.status().as_u16(),
                url
            ));
        }

        let dataset: Dataset = response
            .json()
            .await
            .context("Failed to parse remote dataset JSON")?;
        dataset.validate()?;
        info!(
            "Loaded dataset '{}' with {} clips from {}",
            dataset.name,
            dataset.len(),
            url
        );
        Ok(dataset)
    }

    /// Build a dataset by scanning a directory of clip files.
    ///
    /// Every file with a recognized video extension contributes one
    /// mapping: the uppercased file stem becomes the gloss, the path
    /// relative to the scanned root becomes the clip path.
    pub fn from_clip_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(anyhow!("Clip directory does not exist: {:?}", dir));
        }

        let mut videos = HashMap::new();
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase());
            if !extension.is_some_and(|e| CLIP_EXTENSIONS.contains(&e.as_str())) {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let gloss = stem.to_uppercase();
                let relative = path
                    .strip_prefix(dir)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .into_owned();
                debug!("Mapping gloss {} -> {}", gloss, relative);
                videos.insert(gloss, relative);
            }
        }

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "local".to_string());
        let base = format!("{}/", dir.to_string_lossy());

        Self::new(name, Some(base), videos)
    }

    /// Small built-in dataset used by the CLI when no source is configured.
    /// Locators are plain relative paths, which the simulated sink accepts.
    pub fn bundled() -> Self {
        let videos = ["HELLO", "GOOD", "MORNING", "MY", "NAME", "IS", "THANK", "YOU", "FRIEND", "WATER", "HELP", "MOTHER", "FATHER"]
            .into_iter()
            .map(|gloss| (gloss.to_string(), format!("clips/{}.mp4", gloss.to_lowercase())))
            .collect();

        Self {
            name: "bundled".to_string(),
            base_url: None,
            videos,
        }
    }
}

/// Shared holder for the active dataset, supporting wholesale hot-swap.
///
/// Readers take a cheap snapshot; a swap replaces the inner `Arc` and
/// only affects sequences started after it.
#[derive(Clone)]
pub struct DatasetStore {
    active: Arc<RwLock<Arc<Dataset>>>,
}

impl DatasetStore {
    /// Create a store with an initial dataset
    pub fn new(dataset: Dataset) -> Self {
        Self {
            active: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    /// Snapshot the currently active dataset
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.active.read().clone()
    }

    /// Replace the active dataset wholesale
    pub fn swap(&self, dataset: Dataset) {
        let mut active = self.active.write();
        info!(
            "Swapping dataset '{}' -> '{}' ({} clips)",
            active.name,
            dataset.name,
            dataset.len()
        );
        *active = Arc::new(dataset);
    }
}
