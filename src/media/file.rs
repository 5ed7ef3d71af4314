/*!
 * Local filesystem clip fetcher.
 */

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;

use super::{ClipHandle, MediaFetcher};
use crate::errors::MediaError;

/// Fetches clips from the local filesystem, resolving relative locators
/// against an optional root directory.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    root: Option<PathBuf>,
}

impl FileFetcher {
    /// Create a fetcher resolving locators as given
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Create a fetcher resolving relative locators under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

#[async_trait]
impl MediaFetcher for FileFetcher {
    async fn fetch(&self, locator: &str) -> Result<ClipHandle, MediaError> {
        let path = match &self.root {
            Some(root) => root.join(locator),
            None => PathBuf::from(locator),
        };

        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| MediaError::Io(format!("{:?}: {}", path, e)))?;

        debug!("Read {} bytes from {:?}", data.len(), path);
        Ok(ClipHandle::new(locator, Bytes::from(data)))
    }
}
