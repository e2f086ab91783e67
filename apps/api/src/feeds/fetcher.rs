use async_trait::async_trait;
use reqwest::Client;
use rss::Channel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned status {0}")]
    Status(u16),

    #[error("RSS parse error: {0}")]
    Parse(#[from] rss::Error),
}

/// Downloads and parses one RSS feed.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Channel, FeedError>;
}

/// Plain reqwest-backed fetcher. No caching, no retries.
#[derive(Clone, Default)]
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Channel, FeedError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let content = response.bytes().await?;
        Ok(Channel::read_from(&content[..])?)
    }
}
