/*!
 * HTTP clip fetcher backed by reqwest.
 */

use async_trait::async_trait;
use log::debug;
use url::Url;

use super::{ClipHandle, MediaFetcher};
use crate::errors::MediaError;

/// Fetches clips over HTTP(S) with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher reusing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<ClipHandle, MediaError> {
        let url = Url::parse(locator)
            .map_err(|_| MediaError::InvalidLocator(locator.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::EndpointError {
                status_code: response.status().as_u16(),
                locator: locator.to_string(),
            });
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| MediaError::FetchFailed(e.to_string()))?;

        debug!("Fetched {} bytes from {}", data.len(), locator);
        Ok(ClipHandle::new(locator, data))
    }
}
