/*!
 * Scripted clip fetcher for tests.
 *
 * Serves synthetic clip bytes for any locator, with configurable
 * failures, an optional artificial latency, and per-locator fetch
 * counters so tests can assert request deduplication.
 */

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use super::{ClipHandle, MediaFetcher};
use crate::errors::MediaError;

/// In-memory fetcher with scripted behavior.
#[derive(Debug, Default)]
pub struct MockFetcher {
    /// Locators that fail every fetch
    failing: HashSet<String>,

    /// Artificial latency applied to every fetch
    latency: Option<Duration>,

    /// Number of fetches issued per locator
    counts: Mutex<HashMap<String, usize>>,
}

impl MockFetcher {
    /// Create a fetcher that succeeds for every locator
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a locator as always failing
    pub fn fail_for(mut self, locator: impl Into<String>) -> Self {
        self.failing.insert(locator.into());
        self
    }

    /// Apply an artificial latency to every fetch
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of fetches issued for a locator
    pub fn fetch_count(&self, locator: &str) -> usize {
        self.counts.lock().get(locator).copied().unwrap_or(0)
    }

    /// Total number of fetches issued
    pub fn total_fetches(&self) -> usize {
        self.counts.lock().values().sum()
    }
}

#[async_trait]
impl MediaFetcher for MockFetcher {
    async fn fetch(&self, locator: &str) -> Result<ClipHandle, MediaError> {
        {
            let mut counts = self.counts.lock();
            *counts.entry(locator.to_string()).or_insert(0) += 1;
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.failing.contains(locator) {
            return Err(MediaError::FetchFailed(format!(
                "scripted failure for {}",
                locator
            )));
        }

        let payload = format!("clip:{}", locator);
        Ok(ClipHandle::new(locator, Bytes::from(payload)))
    }
}
