//! HTTP API handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::alert::{render_alert, DiscordNotifier};
use crate::arbitrage::{scan_gamma, ArbitrageOpportunity, DEFAULT_MIN_VOLUME};
use crate::config::Config;
use crate::error::{AlertError, GammaError, ScoutError};
use crate::market::GammaClient;

/// Default number of events returned by the markets proxy.
const DEFAULT_MARKETS_LIMIT: u32 = 20;

/// Application state shared with handlers.
///
/// Holds only cheaply clonable client handles; no mutable state is shared
/// across requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gamma API client.
    pub gamma: GammaClient,
    /// Discord alert dispatcher.
    pub notifier: DiscordNotifier,
}

impl AppState {
    /// Build state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            gamma: GammaClient::new(config),
            notifier: DiscordNotifier::new(config),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Query parameters for the markets proxy.
#[derive(Debug, Deserialize)]
pub struct MarketsQuery {
    /// Number of events to fetch.
    pub limit: Option<u32>,
}

/// Query parameters for arbitrage scans.
#[derive(Debug, Deserialize)]
pub struct ArbitrageQuery {
    /// Volume floor in USD.
    pub min_volume: Option<Decimal>,
}

/// Alert message, accepted from the query string or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct AlertMessage {
    /// Message text to deliver.
    pub message: Option<String>,
}

/// Response after posting a manual alert.
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    /// Status: "sent".
    pub status: &'static str,
}

/// Response from the alert-on-arbitrage endpoint.
#[derive(Debug, Serialize)]
pub struct AlertArbitrageResponse {
    /// "alert_sent" or "no_arbitrage".
    pub status: &'static str,
    /// Number of opportunities found.
    pub count: usize,
    /// Profit of the top opportunity, absent when none exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_profit: Option<Decimal>,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Proxy the upstream event listing verbatim.
pub async fn get_markets(
    State(state): State<AppState>,
    Query(query): Query<MarketsQuery>,
) -> Result<Json<Value>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_MARKETS_LIMIT);
    let events = state.gamma.events_raw(limit).await?;

    Ok(Json(events))
}

/// Scan the highest-volume events for arbitrage opportunities.
pub async fn get_arbitrage(
    State(state): State<AppState>,
    Query(query): Query<ArbitrageQuery>,
) -> Result<Json<Vec<ArbitrageOpportunity>>, ApiError> {
    let min_volume = query.min_volume.unwrap_or(DEFAULT_MIN_VOLUME);
    let opportunities = scan_gamma(&state.gamma, min_volume).await?;

    Ok(Json(opportunities))
}

/// Post a message verbatim to the Discord webhook.
pub async fn send_alert(
    State(state): State<AppState>,
    Query(query): Query<AlertMessage>,
    body: Option<Json<AlertMessage>>,
) -> Result<Json<AlertResponse>, ApiError> {
    let message = body
        .and_then(|Json(payload)| payload.message)
        .or(query.message)
        .ok_or_else(ApiError::missing_message)?;

    state.notifier.send(&message).await?;

    Ok(Json(AlertResponse { status: "sent" }))
}

/// Scan with the default volume floor and alert on the best opportunity.
pub async fn alert_arbitrage(
    State(state): State<AppState>,
) -> Result<Json<AlertArbitrageResponse>, ApiError> {
    let opportunities = scan_gamma(&state.gamma, DEFAULT_MIN_VOLUME).await?;

    let Some(top) = opportunities.first() else {
        return Ok(Json(AlertArbitrageResponse {
            status: "no_arbitrage",
            count: 0,
            top_profit: None,
        }));
    };

    let message = render_alert(top, opportunities.len());
    state.notifier.send(&message).await?;

    Ok(Json(AlertArbitrageResponse {
        status: "alert_sent",
        count: opportunities.len(),
        top_profit: Some(top.potential_profit),
    }))
}

/// Error response carrying an HTTP status and a detail message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    fn missing_message() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "message is required".to_string(),
        }
    }
}

impl From<GammaError> for ApiError {
    fn from(err: GammaError) -> Self {
        error!(error = %err, "gamma api request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "Gamma API error".to_string(),
        }
    }
}

impl From<AlertError> for ApiError {
    fn from(err: AlertError) -> Self {
        error!(error = %err, "alert delivery failed");
        let detail = match err {
            AlertError::NotConfigured => "Discord webhook not configured",
            AlertError::Rejected { .. } | AlertError::Http(_) => "Discord webhook failed",
        };

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.to_string(),
        }
    }
}

impl From<ScoutError> for ApiError {
    fn from(err: ScoutError) -> Self {
        match err {
            ScoutError::Gamma(e) => e.into(),
            ScoutError::Alert(e) => e.into(),
            other => {
                error!(error = %other, "internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: "internal error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
