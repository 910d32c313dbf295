//! Prometheus metrics for latency tracking and monitoring.
//!
//! This module provides metrics for:
//! - Gamma API request volume, errors, and latency
//! - Arbitrage scan latency and detection counts
//! - Discord alert delivery outcomes

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Gamma API fetch latency metric name.
pub const METRIC_GAMMA_FETCH_LATENCY: &str = "gamma_fetch_latency_ms";
/// Arbitrage scan latency metric name.
pub const METRIC_SCAN_LATENCY: &str = "scan_latency_ms";
/// Gamma API requests counter metric name.
pub const METRIC_GAMMA_REQUESTS: &str = "gamma_requests_total";
/// Gamma API errors counter metric name.
pub const METRIC_GAMMA_ERRORS: &str = "gamma_errors_total";
/// Opportunities detected counter metric name.
pub const METRIC_OPPORTUNITIES_DETECTED: &str = "opportunities_detected_total";
/// Alerts sent counter metric name.
pub const METRIC_ALERTS_SENT: &str = "alerts_sent_total";
/// Alert failures counter metric name.
pub const METRIC_ALERT_FAILURES: &str = "alert_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    // Latency histograms
    describe_histogram!(
        METRIC_GAMMA_FETCH_LATENCY,
        "Gamma API fetch latency in milliseconds"
    );
    describe_histogram!(
        METRIC_SCAN_LATENCY,
        "Time to scan fetched events for arbitrage in milliseconds"
    );

    // Counters
    describe_counter!(
        METRIC_GAMMA_REQUESTS,
        "Total number of Gamma API requests issued"
    );
    describe_counter!(
        METRIC_GAMMA_ERRORS,
        "Total number of Gamma API requests that failed"
    );
    describe_counter!(
        METRIC_OPPORTUNITIES_DETECTED,
        "Total number of arbitrage opportunities detected"
    );
    describe_counter!(
        METRIC_ALERTS_SENT,
        "Total number of Discord alerts delivered"
    );
    describe_counter!(
        METRIC_ALERT_FAILURES,
        "Total number of Discord alerts that failed to deliver"
    );

    debug!("Metrics initialized");
}

/// Record Gamma API fetch latency.
pub fn record_gamma_fetch_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_GAMMA_FETCH_LATENCY).record(latency_ms);
}

/// Record arbitrage scan latency.
pub fn record_scan_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_SCAN_LATENCY).record(latency_ms);
}

/// Increment Gamma API request counter.
pub fn inc_gamma_requests() {
    counter!(METRIC_GAMMA_REQUESTS).increment(1);
}

/// Increment Gamma API error counter.
pub fn inc_gamma_errors() {
    counter!(METRIC_GAMMA_ERRORS).increment(1);
}

/// Add a scan's detections to the opportunities counter.
pub fn inc_opportunities_detected(count: usize) {
    counter!(METRIC_OPPORTUNITIES_DETECTED).increment(count as u64);
}

/// Increment alerts sent counter.
pub fn inc_alerts_sent() {
    counter!(METRIC_ALERTS_SENT).increment(1);
}

/// Increment alert failure counter.
pub fn inc_alert_failures() {
    counter!(METRIC_ALERT_FAILURES).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_are_noops_without_a_recorder() {
        // The metrics facade silently drops samples until an exporter is
        // installed, so these must not panic in tests.
        init_metrics();
        inc_gamma_requests();
        inc_gamma_errors();
        inc_opportunities_detected(3);
        inc_alerts_sent();
        inc_alert_failures();
        record_gamma_fetch_latency(Instant::now());
        record_scan_latency(Instant::now());
    }
}
