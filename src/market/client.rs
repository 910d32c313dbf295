//! Gamma API client.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::GammaError;
use crate::metrics;

use super::types::GammaEvent;

/// User agent sent with every upstream request.
const USER_AGENT: &str = concat!("polymarket-scout/", env!("CARGO_PKG_VERSION"));

/// Read-only client for Polymarket's Gamma market data API.
#[derive(Debug, Clone)]
pub struct GammaClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the Gamma API.
    base_url: String,
}

impl GammaClient {
    /// Create a new Gamma client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.gamma_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the Gamma base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch active events ordered by 24-hour volume, deserialized for
    /// opportunity scanning.
    #[instrument(skip(self))]
    pub async fn events_by_volume(&self, limit: u32) -> Result<Vec<GammaEvent>, GammaError> {
        let url = format!("{}/events", self.base_url);
        let params = [
            ("limit", limit.to_string()),
            ("active", "true".to_string()),
            ("order", "volume24hr".to_string()),
        ];

        let start = std::time::Instant::now();
        metrics::inc_gamma_requests();

        let response = self.http.get(&url).query(&params).send().await?;
        metrics::record_gamma_fetch_latency(start);

        if !response.status().is_success() {
            metrics::inc_gamma_errors();
            warn!(status = %response.status(), "gamma api returned error status");
            return Err(GammaError::Api {
                status: response.status(),
            });
        }

        let events: Vec<GammaEvent> = response.json().await?;
        debug!(events = events.len(), "fetched gamma events");

        Ok(events)
    }

    /// Fetch active events as raw JSON, preserving upstream fields verbatim.
    #[instrument(skip(self))]
    pub async fn events_raw(&self, limit: u32) -> Result<Value, GammaError> {
        let url = format!("{}/events", self.base_url);
        let params = [("limit", limit.to_string()), ("active", "true".to_string())];

        let start = std::time::Instant::now();
        metrics::inc_gamma_requests();

        let response = self.http.get(&url).query(&params).send().await?;
        metrics::record_gamma_fetch_latency(start);

        if !response.status().is_success() {
            metrics::inc_gamma_errors();
            warn!(status = %response.status(), "gamma api returned error status");
            return Err(GammaError::Api {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
