use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_API_URL: &str = "http://192.168.0.97:8000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SCAN_SETTLE_MS: u64 = 500;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout: Duration,
    /// Delay between accepting a decoded QR payload and resolving it
    pub scan_settle_delay: Duration,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_base_url: env::var("INVENTORY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            http_timeout: Duration::from_secs(parse_u64_var(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            scan_settle_delay: Duration::from_millis(parse_u64_var(
                "SCAN_SETTLE_MS",
                DEFAULT_SCAN_SETTLE_MS,
            )?),
        })
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/api/inventarios/", self.api_base_url.trim_end_matches('/'))
    }

    pub fn status_update_url(&self) -> String {
        format!(
            "{}/api/atualizar_status/",
            self.api_base_url.trim_end_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            scan_settle_delay: Duration::from_millis(DEFAULT_SCAN_SETTLE_MS),
        }
    }
}

fn parse_u64_var(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(raw) => parse_u64(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_u64(name: &str, raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got {:?}", name, raw)))
}
