pub mod http;
pub mod json_file;
pub mod seed;
pub mod traits;

pub use http::HttpStore;
pub use json_file::JsonFileStore;
pub use seed::SeedStore;
pub use traits::PropertyStore;

use crate::config::Config;
use crate::models::Property;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Pick the store the configuration points at: file, then URL, then the
/// built-in catalog
pub fn open_store(config: &Config) -> Result<Box<dyn PropertyStore>> {
    let store: Box<dyn PropertyStore> = match (&config.properties_path, &config.properties_url) {
        (Some(path), _) => Box::new(JsonFileStore::new(path)),
        (None, Some(url)) => Box::new(HttpStore::with_timeout(url.clone(), config.http_timeout)?),
        (None, None) => Box::new(SeedStore::new()),
    };
    info!("Using {} catalog", store.source_name());
    Ok(store)
}

/// Snapshot of a catalog as loaded from a store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub properties: Vec<Property>,
}

impl Catalog {
    pub async fn load(store: &dyn PropertyStore) -> Result<Self> {
        let properties = store.load().await?;
        Ok(Self {
            source: store.source_name().to_string(),
            loaded_at: Utc::now(),
            properties,
        })
    }
}
