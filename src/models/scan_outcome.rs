use super::InventoryRecord;

/// Result of resolving one decoded QR payload against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The payload holds no standalone six-digit run
    InvalidFormat,
    NotFound { inventory_number: String },
    Matched(InventoryRecord),
}

impl ScanOutcome {
    pub fn matched_record(&self) -> Option<&InventoryRecord> {
        match self {
            ScanOutcome::Matched(record) => Some(record),
            _ => None,
        }
    }
}

/// Whether the catalog fetch at mount succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded,
    Unavailable,
}
