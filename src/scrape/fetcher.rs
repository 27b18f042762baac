// src/scrape/fetcher.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the listing source: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("listing source returned status {0}")]
    Status(u16),
}

/// Single retrieval of the upstream page. No retries and no caching at this
/// layer; a failed fetch propagates to the caller, which may retry the whole
/// request.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpListingFetcher {
    client: Client,
}

impl HttpListingFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl ListingFetcher for HttpListingFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching job listings: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Transport)
    }
}
