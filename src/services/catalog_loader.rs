use crate::models::{CatalogStatus, InventoryRecord};
use crate::services::inventory_api::InventoryApi;

/// In-memory snapshot of the inventory list, in fetch order
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<InventoryRecord>,
    status: CatalogStatus,
}

impl Catalog {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self {
            records,
            status: CatalogStatus::Loaded,
        }
    }

    /// Empty catalog left behind by a failed fetch
    pub fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            status: CatalogStatus::Unavailable,
        }
    }

    /// Fetch the catalog once. Failures are logged and leave an empty catalog.
    pub async fn load(api: &dyn InventoryApi) -> Self {
        match api.fetch_catalog().await {
            Ok(records) => {
                tracing::info!("Loaded {} inventory records", records.len());
                Self::new(records)
            }
            Err(e) => {
                tracing::error!("Failed to load inventory catalog: {}", e);
                Self::unavailable()
            }
        }
    }

    /// First record with the given inventory number
    pub fn find(&self, inventory_number: &str) -> Option<&InventoryRecord> {
        self.records
            .iter()
            .find(|r| r.inventory_number == inventory_number)
    }

    #[cfg(test)]
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
