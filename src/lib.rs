//! Polymarket arbitrage scanner with Discord alerting.
//!
//! Scans active Polymarket binary markets for mispricings where buying both
//! the YES and NO outcomes costs less than $1.00, guaranteeing profit
//! regardless of how the market resolves.
//!
//! # Strategy
//!
//! At resolution, exactly ONE side pays $1.00 per share. If the combined
//! cost of both sides is below $1.00 (minus a fee buffer), profit is locked:
//!
//! ```text
//! YES price:  $0.40
//! NO price:   $0.45
//! ─────────────────
//! Total:      $0.85 < $0.99 ✅
//! Profit:     $0.15 per share (15% guaranteed)
//! ```
//!
//! The scanner exposes this as a small HTTP service: `/arbitrage` returns
//! the ranked opportunity list, `/alert/arbitrage` pushes the best one to a
//! Discord webhook.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Gamma API client and event/market types
//! - [`arbitrage`]: Opportunity extraction and ranking
//! - [`alert`]: Discord message formatting and delivery
//! - [`api`]: HTTP surface (health, markets proxy, arbitrage, alerts)
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod alert;
pub mod api;
pub mod arbitrage;
pub mod config;
pub mod error;
pub mod market;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ScoutError};
