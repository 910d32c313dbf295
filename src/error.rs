//! Unified error types for the arbitrage scanner.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for the arbitrage scanner.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Gamma API error.
    #[error("gamma error: {0}")]
    Gamma(#[from] GammaError),

    /// Alert delivery error.
    #[error("alert error: {0}")]
    Alert(#[from] AlertError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors talking to the Gamma market data API.
#[derive(Error, Debug)]
pub enum GammaError {
    /// Upstream answered with a non-success status.
    #[error("gamma api returned {status}")]
    Api {
        /// The upstream HTTP status.
        status: StatusCode,
    },

    /// HTTP transport or body decode failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors delivering a Discord alert.
#[derive(Error, Debug)]
pub enum AlertError {
    /// No webhook URL was configured in the environment.
    #[error("discord webhook not configured")]
    NotConfigured,

    /// The webhook answered with a status outside {200, 204}.
    #[error("discord webhook rejected alert with {status}")]
    Rejected {
        /// The webhook HTTP status.
        status: StatusCode,
    },

    /// HTTP transport failure reaching the webhook.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ScoutError>;
