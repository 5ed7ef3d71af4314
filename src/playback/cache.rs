/*!
 * Preloaded clip caching.
 *
 * This module provides the shared cache of loaded clip buffers so that
 * sequences replaying the same glosses avoid redundant fetches.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::media::ClipHandle;

/// Clip cache keyed by resolved locator.
///
/// Entries live for the process lifetime; nothing is evicted except via
/// an explicit [`clear`](PreloadCache::clear). Cloning shares the
/// underlying storage.
pub struct PreloadCache {
    /// Internal cache storage
    entries: Arc<RwLock<HashMap<String, ClipHandle>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,
}

impl PreloadCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
        }
    }

    /// Get a clip handle from the cache
    pub fn get(&self, locator: &str) -> Option<ClipHandle> {
        let entries = self.entries.read();

        match entries.get(locator) {
            Some(handle) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!("Cache hit for '{}'", locator);
                Some(handle.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!("Cache miss for '{}'", locator);
                None
            }
        }
    }

    /// Store a clip handle in the cache
    pub fn store(&self, handle: ClipHandle) {
        let mut entries = self.entries.write();
        debug!("Cached clip for '{}' ({} bytes)", handle.locator, handle.len());
        entries.insert(handle.locator.clone(), handle);
    }

    /// Whether the cache holds a clip for the locator
    pub fn contains(&self, locator: &str) -> bool {
        self.entries.read().contains_key(locator)
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache and reset statistics
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();

        let mut hits = self.hits.write();
        *hits = 0;

        let mut misses = self.misses.write();
        *misses = 0;

        debug!("Preload cache cleared");
    }

    /// Number of cached clips
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for PreloadCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PreloadCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
        }
    }
}
