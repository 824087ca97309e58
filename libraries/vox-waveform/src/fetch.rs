//! Source fetching over HTTP
//!
//! The default [`SourceFetcher`] implementation for remote audio assets.
//! In-memory sources short-circuit without touching the network.

use async_trait::async_trait;
use tracing::debug;
use vox_core::{AudioSource, Result, SourceFetcher, VoxError};

/// HTTP byte fetcher for `AudioSource::Url`
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh HTTP client
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a fetcher over an existing HTTP client
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, source: &AudioSource) -> Result<Vec<u8>> {
        match source {
            AudioSource::Bytes(bytes) => Ok(bytes.to_vec()),
            AudioSource::Url(url) => {
                debug!(url = %url, "fetching audio source");

                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| VoxError::fetch(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(VoxError::fetch(format!(
                        "unexpected status {} for {}",
                        status, url
                    )));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| VoxError::fetch(e.to_string()))?;

                debug!(url = %url, len = bytes.len(), "fetched audio source");
                Ok(bytes.to_vec())
            }
        }
    }
}
