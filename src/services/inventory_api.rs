use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::http_client::HttpClient;
use crate::models::{InventoryRecord, StatusUpdateRequest};
use crate::services::qr_extractor::is_inventory_number;

/// Remote inventory API used by a scan session
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /api/inventarios/`
    async fn fetch_catalog(&self) -> AppResult<Vec<InventoryRecord>>;

    /// `POST /api/atualizar_status/`. Only HTTP 200 counts as success.
    async fn mark_located(&self, inventory_number: &str) -> AppResult<()>;
}

pub struct HttpInventoryApi {
    http: HttpClient,
    catalog_url: String,
    status_update_url: String,
}

impl HttpInventoryApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new(config.http_timeout)?,
            catalog_url: config.catalog_url(),
            status_update_url: config.status_update_url(),
        })
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn fetch_catalog(&self) -> AppResult<Vec<InventoryRecord>> {
        tracing::debug!("Fetching catalog from {}", self.catalog_url);
        self.http.get_json(&self.catalog_url).await
    }

    async fn mark_located(&self, inventory_number: &str) -> AppResult<()> {
        if !is_inventory_number(inventory_number) {
            return Err(AppError::InvalidInput(format!(
                "inventory number must be six digits, got {:?}",
                inventory_number
            )));
        }

        let body = StatusUpdateRequest {
            inventory_number: inventory_number.to_string(),
        };
        let response = self.http.post_json(&self.status_update_url, &body).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                "Status update for {} rejected with {}",
                inventory_number,
                status
            );
            return Err(AppError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.status_update_url.clone(),
            });
        }

        tracing::info!("Inventory {} marked as located", inventory_number);
        Ok(())
    }
}
