// src/services/fetcher.rs

//! Document fetching service.
//!
//! Retrieves raw bytes for a URL and stages them as a local resource.

use async_trait::async_trait;

use crate::config::FetchConfig;
use crate::error::Result;
use crate::storage::{StagedResource, StagingDir};
use crate::utils::http;

/// Boundary for retrieving one URL into the staging area.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the document at `url` and stage its bytes.
    async fn fetch(&self, url: &str, staging: &StagingDir) -> Result<StagedResource>;
}

/// HTTP fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = http::create_client(config)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, staging: &StagingDir) -> Result<StagedResource> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        staging.stage(url, &bytes).await
    }
}
