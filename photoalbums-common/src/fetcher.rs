//! HTTP fetcher for the upstream placeholder service
//!
//! Returns response bodies as plain text; all parsing happens downstream so
//! the network-facing part stays as small as possible. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::builder::PlaceholderFetcher;
use crate::config::UpstreamConfig;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("photoalbums/", env!("CARGO_PKG_VERSION"));

/// [`PlaceholderFetcher`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http_client: reqwest::Client,
    albums_url: Url,
    photos_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher for the configured upstream endpoints
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            albums_url: config.albums_url()?,
            photos_url: config.photos_url()?,
        })
    }

    pub fn albums_url(&self) -> &Url {
        &self.albums_url
    }

    pub fn photos_url(&self) -> &Url {
        &self.photos_url
    }

    async fn get_text(&self, url: &Url) -> Result<String> {
        tracing::debug!(url = %url, "Fetching upstream collection");

        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url = %url, bytes = body.len(), "Fetched upstream collection");
        Ok(body)
    }
}

#[async_trait]
impl PlaceholderFetcher for HttpFetcher {
    async fn fetch_albums_text(&self) -> Result<String> {
        self.get_text(&self.albums_url).await
    }

    async fn fetch_photos_text(&self) -> Result<String> {
        self.get_text(&self.photos_url).await
    }

    fn sources(&self) -> Vec<String> {
        vec![self.albums_url.to_string(), self.photos_url.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation_uses_configured_endpoints() {
        let config = UpstreamConfig::default();
        let fetcher = HttpFetcher::new(&config).unwrap();

        assert_eq!(
            fetcher.albums_url().as_str(),
            "http://jsonplaceholder.typicode.com/albums"
        );
        assert_eq!(
            fetcher.photos_url().as_str(),
            "http://jsonplaceholder.typicode.com/photos"
        );
        assert_eq!(
            fetcher.sources(),
            vec![
                "http://jsonplaceholder.typicode.com/albums".to_string(),
                "http://jsonplaceholder.typicode.com/photos".to_string(),
            ]
        );
    }

    #[test]
    fn test_fetcher_rejects_relative_base_url() {
        let config = UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        };

        assert!(matches!(HttpFetcher::new(&config), Err(Error::Config(_))));
    }
}
