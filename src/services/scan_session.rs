use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::AppResult;
use crate::models::{CatalogStatus, ScanOutcome};
use crate::services::catalog_loader::Catalog;
use crate::services::inventory_api::InventoryApi;
use crate::services::scan_resolver::resolve;
use crate::services::single_flight::SingleFlight;

/// State of one mounted scanner screen.
///
/// Created on mount (which loads the catalog once) and dropped on unmount. The
/// catalog is never refreshed while the session lives.
pub struct ScanSession {
    api: Arc<dyn InventoryApi>,
    catalog: Catalog,
    scan_lock: SingleFlight,
    scanner_open: AtomicBool,
    settle_delay: Duration,
}

/// What a single accepted scan produced
#[derive(Debug)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    /// Present only for matches; resolves once the server answers
    pub status_update: Option<StatusUpdate>,
}

/// In-flight `mark_located` request. Dropping it does not cancel the request.
#[derive(Debug)]
pub struct StatusUpdate {
    pub inventory_number: String,
    handle: JoinHandle<AppResult<()>>,
}

impl StatusUpdate {
    pub async fn wait(self) -> AppResult<()> {
        self.handle.await?
    }
}

impl ScanSession {
    pub async fn mount(api: Arc<dyn InventoryApi>, settle_delay: Duration) -> Self {
        let catalog = Catalog::load(api.as_ref()).await;
        Self::with_catalog(api, catalog, settle_delay)
    }

    pub fn with_catalog(api: Arc<dyn InventoryApi>, catalog: Catalog, settle_delay: Duration) -> Self {
        Self {
            api,
            catalog,
            scan_lock: SingleFlight::new(),
            scanner_open: AtomicBool::new(false),
            settle_delay,
        }
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog.status()
    }

    /// Open the scanning surface and re-arm the scan lock
    pub fn open_scanner(&self) {
        self.scan_lock.reset();
        self.scanner_open.store(true, Ordering::Release);
        tracing::debug!("Scanner opened");
    }

    pub fn close_scanner(&self) {
        if self.scanner_open.swap(false, Ordering::AcqRel) {
            tracing::debug!("Scanner closed");
        }
    }

    pub fn is_scanner_open(&self) -> bool {
        self.scanner_open.load(Ordering::Acquire)
    }

    /// Handle a decode event from the camera.
    ///
    /// Returns `None` when the event is ignored: empty payload, scanner closed, or a
    /// scan already accepted since the scanner was last opened. An accepted scan
    /// closes the scanner, waits the settle delay, then resolves. On a match the
    /// status update is started in the background.
    pub async fn on_barcode_scanned(&self, payload: &str) -> Option<ScanReport> {
        if payload.is_empty() || !self.is_scanner_open() {
            return None;
        }
        if !self.scan_lock.try_acquire() {
            tracing::debug!("Scan already in flight, ignoring decode event");
            return None;
        }

        self.close_scanner();
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }

        let outcome = resolve(&self.catalog, payload);
        let status_update = outcome
            .matched_record()
            .map(|record| self.spawn_status_update(&record.inventory_number));

        Some(ScanReport {
            outcome,
            status_update,
        })
    }

    fn spawn_status_update(&self, inventory_number: &str) -> StatusUpdate {
        tracing::info!("Marking inventory {} as located", inventory_number);
        let api = Arc::clone(&self.api);
        let number = inventory_number.to_string();
        let handle = tokio::spawn(async move { api.mark_located(&number).await });
        StatusUpdate {
            inventory_number: inventory_number.to_string(),
            handle,
        }
    }

    pub fn unmount(self) {
        tracing::debug!("Scanner screen unmounted, dropping {} records", self.catalog.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::inventory_api::testing::{record, FakeInventoryApi};

    async fn mounted(api: Arc<FakeInventoryApi>, settle_delay: Duration) -> ScanSession {
        let session = ScanSession::mount(api, settle_delay).await;
        session.open_scanner();
        session
    }

    fn chair_api() -> Arc<FakeInventoryApi> {
        Arc::new(FakeInventoryApi::with_catalog(vec![record(1, "123456", "Cadeira")]))
    }

    #[tokio::test]
    async fn test_match_marks_item_located() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::ZERO).await;

        let report = session.on_barcode_scanned("INV:123456;").await.unwrap();
        assert_eq!(
            report.outcome.matched_record().map(|r| r.denomination.as_str()),
            Some("Cadeira")
        );
        assert!(!session.is_scanner_open());

        let update = report.status_update.expect("status update should start");
        assert_eq!(update.inventory_number, "123456");
        update.wait().await.unwrap();
        assert_eq!(api.located_numbers(), vec!["123456".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_format_sends_nothing() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::ZERO).await;

        let report = session.on_barcode_scanned("12345").await.unwrap();
        assert_eq!(report.outcome, ScanOutcome::InvalidFormat);
        assert!(report.status_update.is_none());
        assert!(api.located_numbers().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_sends_nothing() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::ZERO).await;

        let report = session.on_barcode_scanned("999999").await.unwrap();
        assert!(matches!(report.outcome, ScanOutcome::NotFound { .. }));
        assert!(report.status_update.is_none());
        assert!(api.located_numbers().is_empty());
    }

    #[tokio::test]
    async fn test_failed_catalog_load_yields_not_found() {
        let api = Arc::new(FakeInventoryApi::unreachable());
        let session = mounted(api.clone(), Duration::ZERO).await;
        assert_eq!(session.catalog_status(), CatalogStatus::Unavailable);

        let report = session.on_barcode_scanned("INV:123456;").await.unwrap();
        assert_eq!(
            report.outcome,
            ScanOutcome::NotFound {
                inventory_number: "123456".to_string()
            }
        );
        assert!(api.located_numbers().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_status_update_surfaces_error() {
        let api = Arc::new(
            FakeInventoryApi::with_catalog(vec![record(1, "123456", "Cadeira")]).answering(500),
        );
        let session = mounted(api, Duration::ZERO).await;

        let report = session.on_barcode_scanned("123456").await.unwrap();
        let err = report.status_update.unwrap().wait().await.unwrap_err();
        assert!(matches!(err, AppError::UnexpectedStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_single_flight_while_pending() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::from_millis(50)).await;

        let (first, second) = tokio::join!(
            session.on_barcode_scanned("INV:123456;"),
            session.on_barcode_scanned("INV:123456;"),
        );
        let reports: Vec<ScanReport> = [first, second].into_iter().flatten().collect();
        assert_eq!(reports.len(), 1);

        for report in reports {
            report.status_update.unwrap().wait().await.unwrap();
        }
        assert_eq!(api.located_numbers().len(), 1);
    }

    #[tokio::test]
    async fn test_reopening_resets_the_lock() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::ZERO).await;

        assert!(session.on_barcode_scanned("999999").await.is_some());
        assert!(session.on_barcode_scanned("999999").await.is_none());

        session.open_scanner();
        assert!(session.on_barcode_scanned("999999").await.is_some());
    }

    #[tokio::test]
    async fn test_events_ignored_when_scanner_closed_or_empty() {
        let api = chair_api();
        let session = ScanSession::mount(api.clone(), Duration::ZERO).await;
        assert!(session.on_barcode_scanned("123456").await.is_none());

        session.open_scanner();
        assert!(session.on_barcode_scanned("").await.is_none());
        assert!(session.on_barcode_scanned("123456").await.is_some());
    }

    #[tokio::test]
    async fn test_catalog_fetched_once_per_mount() {
        let api = chair_api();
        let session = mounted(api.clone(), Duration::ZERO).await;
        for _ in 0..3 {
            session.open_scanner();
            session.on_barcode_scanned("999999").await;
        }
        assert_eq!(api.fetches.load(Ordering::SeqCst), 1);
        session.unmount();
    }
}
