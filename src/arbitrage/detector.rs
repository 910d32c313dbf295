//! Arbitrage opportunity detection across Gamma events.

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use super::calculator::{evaluate_market, ArbitrageOpportunity, COMBINED_PRICE_THRESHOLD};
use crate::market::{GammaClient, GammaEvent};
use crate::metrics;

/// Number of events fetched per scan, highest 24-hour volume first.
pub const SCAN_EVENT_LIMIT: u32 = 100;

/// Scan events for mispriced markets and rank the findings.
///
/// Walks every market nested under every event, keeps those whose combined
/// price sits under the fee-buffer threshold with volume at or above
/// `min_volume`, and returns them sorted by potential profit descending.
/// Markets that fail to parse are skipped without aborting the scan.
#[instrument(skip(events), fields(events = events.len()))]
pub fn scan_events(events: &[GammaEvent], min_volume: Decimal) -> Vec<ArbitrageOpportunity> {
    let start = std::time::Instant::now();

    let mut opportunities: Vec<ArbitrageOpportunity> = events
        .iter()
        .flat_map(|event| {
            event.markets.iter().filter_map(|market| {
                evaluate_market(event, market, min_volume, COMBINED_PRICE_THRESHOLD)
            })
        })
        .collect();

    rank_opportunities(&mut opportunities);
    metrics::record_scan_latency(start);

    if opportunities.is_empty() {
        debug!(min_volume = %min_volume, "no arbitrage opportunities");
    } else {
        metrics::inc_opportunities_detected(opportunities.len());
        info!(
            opportunities = opportunities.len(),
            top_profit = %opportunities[0].potential_profit,
            "arbitrage opportunities detected"
        );
    }

    opportunities
}

/// Sort opportunities by potential profit descending, breaking ties by
/// volume descending. The sort is stable, so fully equal entries keep their
/// upstream order.
pub fn rank_opportunities(opportunities: &mut [ArbitrageOpportunity]) {
    opportunities.sort_by(|a, b| {
        b.potential_profit
            .cmp(&a.potential_profit)
            .then(b.volume_24h.cmp(&a.volume_24h))
    });
}

/// Fetch the highest-volume active events and scan them.
#[instrument(skip(client))]
pub async fn scan_gamma(
    client: &GammaClient,
    min_volume: Decimal,
) -> crate::Result<Vec<ArbitrageOpportunity>> {
    let events = client.events_by_volume(SCAN_EVENT_LIMIT).await?;
    Ok(scan_events(&events, min_volume))
}
