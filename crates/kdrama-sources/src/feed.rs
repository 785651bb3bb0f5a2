use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where a feed's CSV text comes from
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Short label used in logs (URL or file path)
    fn name(&self) -> &str;

    /// Retrieve the whole CSV document. One attempt, no retry.
    async fn fetch_text(&self) -> Result<String, FeedError>;
}

/// A published spreadsheet export fetched with a single GET
#[derive(Clone)]
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Build the HTTP client shared by all feeds of one run
pub fn create_feed_client(user_agent: &str, timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_text(&self) -> Result<String, FeedError> {
        debug!(url = %self.url, "Fetching CSV feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Fetch {
                url: self.url.clone(),
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Fetch {
                url: self.url.clone(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}", status),
            });
        }

        let text = response.text().await.map_err(|e| FeedError::Fetch {
            url: self.url.clone(),
            status: Some(status.as_u16()),
            message: e.to_string(),
        })?;

        info!(url = %self.url, bytes = text.len(), "Fetched CSV feed");
        Ok(text)
    }
}

/// A CSV export on the local filesystem
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
    name: String,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_text(&self) -> Result<String, FeedError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.name, bytes = text.len(), "Read CSV feed from file");
        Ok(text)
    }
}

/// Serves a fixed document; handy wherever a feed is needed without IO
#[derive(Debug, Clone)]
pub struct StaticFeed {
    name: String,
    text: String,
}

impl StaticFeed {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_text(&self) -> Result<String, FeedError> {
        Ok(self.text.clone())
    }
}
