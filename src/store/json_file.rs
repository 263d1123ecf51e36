use crate::models::Property;
use crate::store::traits::PropertyStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog stored as a JSON array of properties
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PropertyStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        info!("Loaded {} properties from {}", properties.len(), self.path.display());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
