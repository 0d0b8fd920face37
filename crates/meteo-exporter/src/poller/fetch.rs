use async_trait::async_trait;
use bytes::Bytes;

use meteo_core::error::{MeteoError, Result};

/// One blocking GET, seen from the poller.
///
/// Implementations must report connect/DNS/send failures as
/// `MeteoError::Transport` and failures while reading the body as
/// `MeteoError::Body`; the poller backs off differently for each.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

/// `reqwest`-backed fetcher. No request timeout is configured.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MeteoError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MeteoError::Transport(e.to_string()))?;

        // Status is not acted on: an error body simply lacks `current`.
        tracing::debug!(status = %resp.status(), url, "upstream responded");

        resp.bytes().await.map_err(|e| MeteoError::Body(e.to_string()))
    }
}
