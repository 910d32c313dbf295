//! Market data from Polymarket's Gamma API.
//!
//! This module handles:
//! - Event and market data structures
//! - Outcome price parsing
//! - Gamma API client

pub mod client;
pub mod types;

pub use client::GammaClient;
pub use types::{GammaEvent, GammaMarket};
