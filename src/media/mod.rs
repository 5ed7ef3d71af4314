/*!
 * Clip media fetching.
 *
 * This module contains the boundary through which clip bytes are
 * actually loaded:
 * - `http`: HTTP(S) fetcher backed by reqwest
 * - `file`: local filesystem fetcher
 * - `mock`: scripted in-memory fetcher for tests
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::errors::MediaError;

pub mod file;
pub mod http;
pub mod mock;

pub use file::FileFetcher;
pub use http::HttpFetcher;
pub use mock::MockFetcher;

/// A loaded, playable media buffer for one clip.
///
/// Cloning is cheap: the underlying buffer is shared.
#[derive(Debug, Clone)]
pub struct ClipHandle {
    /// Locator the clip was loaded from
    pub locator: String,

    /// Raw clip bytes
    pub data: Bytes,
}

impl ClipHandle {
    /// Create a handle from a locator and its loaded bytes
    pub fn new(locator: impl Into<String>, data: Bytes) -> Self {
        Self {
            locator: locator.into(),
            data,
        }
    }

    /// Size of the loaded clip in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the clip buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Common trait for all clip fetch backends.
///
/// Implementations resolve a clip locator to its raw bytes. They are
/// shared across concurrent preload tasks and must be thread-safe.
#[async_trait]
pub trait MediaFetcher: Send + Sync + Debug {
    /// Fetch the clip at the given locator
    async fn fetch(&self, locator: &str) -> Result<ClipHandle, MediaError>;
}
