use crate::models::ScanOutcome;
use crate::services::catalog_loader::Catalog;
use crate::services::qr_extractor::extract_inventory_number;

/// Resolve a decoded QR payload against the current catalog snapshot
pub fn resolve(catalog: &Catalog, payload: &str) -> ScanOutcome {
    let Some(inventory_number) = extract_inventory_number(payload) else {
        tracing::debug!("QR payload has no inventory number: {:?}", payload);
        return ScanOutcome::InvalidFormat;
    };

    match catalog.find(inventory_number) {
        Some(record) => ScanOutcome::Matched(record.clone()),
        None => {
            tracing::debug!("Inventory {} not in catalog", inventory_number);
            ScanOutcome::NotFound {
                inventory_number: inventory_number.to_string(),
            }
        }
    }
}
