use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for every source of the property catalog
/// New sources (a spreadsheet export, a shared API) only need to implement this
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Load the full, read-only catalog
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
