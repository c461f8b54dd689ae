// src/directory/fetcher.rs
use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;

use crate::error::FetchError;

/// One bounded attempt against one URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_once(&self, url: &str, timeout: Duration) -> Result<Value, FetchError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status));
        }

        let text = response.text().await?;
        debug!("Received {} bytes from {}", text.len(), url);

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_once(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        // The deadline covers the whole exchange, body included. Dropping the
        // request future on expiry cancels the request.
        match tokio::time::timeout(timeout, self.get_json(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        }
    }
}
