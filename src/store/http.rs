use crate::models::Property;
use crate::store::traits::PropertyStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalog served as JSON over HTTP
pub struct HttpStore {
    client: Client,
    url: String,
}

impl HttpStore {
    /// Create a store with the default 30 second timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("getaway-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PropertyStore for HttpStore {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch catalog")?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog: {}", response.status());
        }

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to decode catalog response")?;

        info!("Fetched {} properties from {}", properties.len(), self.url);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "HTTP"
    }
}
