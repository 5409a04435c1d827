// src/remote.rs
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::models::{Account, TransferResource};

/// Errors crossing the backend boundary.
///
/// The split matters: `Transport` is fatal for the operation it occurred in,
/// while `Decode` means the body was read but was not the expected JSON, which
/// collection fetches degrade to an empty collection instead of failing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error decoding json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch task died: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Typed client for the remote data source.
#[derive(Debug, Clone)]
pub struct Backend {
    base_url: String,
    client: Client,
}

impl Backend {
    /// Build the shared client; `timeout` is the deadline carried by every
    /// outbound call so a slow dependency cannot stall a request forever.
    pub fn new(base_url: &str, timeout: Duration) -> eyre::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch one of the list resources (`users`, `accounts`, `transfers`,
    /// `likes`) and decode it as a JSON array.
    ///
    /// The status code is not inspected: an upstream error page simply fails
    /// to decode and surfaces as `FetchError::Decode`.
    pub async fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{}", self.base_url, resource);
        info!("📡 GET {}", url);

        let text = self.client.get(&url).send().await?.text().await?;
        let records: Vec<T> = serde_json::from_str(&text)?;
        Ok(records)
    }

    /// Look up a single account by identifier.
    pub async fn account(&self, id: i64) -> Result<Account, FetchError> {
        let url = format!("{}/accounts/{}", self.base_url, id);
        info!("📡 GET {}", url);

        let text = self.client.get(&url).send().await?.text().await?;
        let account: Account = serde_json::from_str(&text)?;
        Ok(account)
    }

    /// Create a transfer downstream; the decoded response is the
    /// authoritative result.
    pub async fn create_transfer(
        &self,
        payload: &TransferResource,
    ) -> Result<TransferResource, FetchError> {
        let url = format!("{}/transfers/", self.base_url);
        info!("📡 POST {}", url);

        let text = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await?
            .text()
            .await?;
        let created: TransferResource = serde_json::from_str(&text)?;
        Ok(created)
    }
}
