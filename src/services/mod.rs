pub mod catalog_loader;
pub mod inventory_api;
pub mod qr_extractor;
pub mod scan_resolver;
pub mod scan_session;
pub mod single_flight;

pub use catalog_loader::Catalog;
pub use inventory_api::{HttpInventoryApi, InventoryApi};
pub use scan_session::{ScanReport, ScanSession, StatusUpdate};
