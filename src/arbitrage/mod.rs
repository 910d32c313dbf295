//! Arbitrage detection over binary prediction markets.
//!
//! This module handles:
//! - Per-market opportunity evaluation
//! - Scanning and ranking across events

pub mod calculator;
pub mod detector;

pub use calculator::{
    evaluate_market, ArbitrageOpportunity, COMBINED_PRICE_THRESHOLD, DEFAULT_MIN_VOLUME,
};
pub use detector::{rank_opportunities, scan_events, scan_gamma};
