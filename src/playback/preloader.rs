/*!
 * Asynchronous clip warm-up.
 *
 * The preloader eagerly loads clip buffers ahead of playback need.
 * Concurrent requests for the same locator are deduplicated: the second
 * request awaits the first instead of issuing a duplicate fetch.
 * Successes populate the shared cache; failures are logged and playback
 * falls back to loading that clip lazily.
 */

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use parking_lot::Mutex;

use super::cache::PreloadCache;
use crate::errors::MediaError;
use crate::media::{ClipHandle, MediaFetcher};

/// Maximum clip fetches in flight during a warm-up pass
const MAX_CONCURRENT_FETCHES: usize = 4;

/// Shared result of one in-flight fetch. The error side carries only a
/// message so the future output stays cloneable for every waiter.
type InFlightFuture = Shared<BoxFuture<'static, Result<ClipHandle, String>>>;

/// Deduplicating clip loader over a shared cache.
pub struct Preloader {
    /// Shared clip cache populated on success
    cache: PreloadCache,

    /// Backend that actually loads clip bytes
    fetcher: Arc<dyn MediaFetcher>,

    /// Fetches currently in flight, keyed by locator
    in_flight: Arc<Mutex<HashMap<String, InFlightFuture>>>,
}

impl Preloader {
    /// Create a preloader over a cache and fetch backend
    pub fn new(cache: PreloadCache, fetcher: Arc<dyn MediaFetcher>) -> Self {
        Self {
            cache,
            fetcher,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Access the underlying cache
    pub fn cache(&self) -> &PreloadCache {
        &self.cache
    }

    /// Obtain a clip handle, from the cache if possible.
    ///
    /// A cache miss joins any in-flight fetch for the same locator, or
    /// starts one. This single entry point serves both eager warm-up and
    /// the lazy load path at playback time.
    pub async fn obtain(&self, locator: &str) -> Result<ClipHandle, MediaError> {
        if let Some(handle) = self.cache.get(locator) {
            return Ok(handle);
        }

        let future = self.fetch_deduplicated(locator);
        future.await.map_err(MediaError::FetchFailed)
    }

    /// Warm the cache for a list of locators without blocking playback.
    ///
    /// Fetches run concurrently, bounded by [`MAX_CONCURRENT_FETCHES`].
    /// Failures are logged and swallowed; the locator simply stays
    /// uncached. Returns the number of clips successfully warmed.
    pub async fn warm(&self, locators: &[String]) -> usize {
        let results = stream::iter(locators.iter().cloned())
            .map(|locator| async move {
                if self.cache.contains(&locator) {
                    return true;
                }
                match self.fetch_deduplicated(&locator).await {
                    Ok(_) => true,
                    Err(e) => {
                        warn!("Preload failed for '{}': {}", locator, e);
                        false
                    }
                }
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect::<Vec<_>>()
            .await;

        let warmed = results.into_iter().filter(|ok| *ok).count();
        debug!("Warmed {}/{} clips", warmed, locators.len());
        warmed
    }

    /// Start or join the in-flight fetch for a locator.
    fn fetch_deduplicated(&self, locator: &str) -> InFlightFuture {
        let mut in_flight = self.in_flight.lock();

        if let Some(existing) = in_flight.get(locator) {
            debug!("Joining in-flight fetch for '{}'", locator);
            return existing.clone();
        }

        let fetcher = self.fetcher.clone();
        let cache = self.cache.clone();
        let registry = self.in_flight.clone();
        let key = locator.to_string();

        let future: InFlightFuture = async move {
            let result = fetcher
                .fetch(&key)
                .await
                .map_err(|e| e.to_string());

            if let Ok(handle) = &result {
                cache.store(handle.clone());
            }

            // The fetch is settled either way; later requests should hit
            // the cache or retry fresh.
            registry.lock().remove(&key);
            result
        }
        .boxed()
        .shared();

        in_flight.insert(locator.to_string(), future.clone());
        future
    }
}

impl Clone for Preloader {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            fetcher: self.fetcher.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}
