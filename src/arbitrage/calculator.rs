//! Opportunity evaluation for individual markets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::market::{GammaEvent, GammaMarket};

/// Combined Yes+No price below which a market counts as mispriced.
/// Sits one cent under $1.00 as a buffer for fees and slippage.
pub const COMBINED_PRICE_THRESHOLD: Decimal = dec!(0.99);

/// Default 24-hour volume floor for opportunity scans.
pub const DEFAULT_MIN_VOLUME: Decimal = dec!(10000);

/// Base URL for event pages on polymarket.com.
pub const POLYMARKET_EVENT_URL: &str = "https://polymarket.com/event";

/// Detected arbitrage opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct ArbitrageOpportunity {
    /// Market identifier.
    pub market_id: String,
    /// Title of the parent event.
    pub event_title: String,
    /// Market question text.
    pub question: String,
    /// Price of the YES outcome.
    pub yes_price: Decimal,
    /// Price of the NO outcome.
    pub no_price: Decimal,
    /// Combined cost per share pair (yes_price + no_price).
    pub combined_price: Decimal,
    /// Profit per share pair (1.0 - combined_price).
    pub potential_profit: Decimal,
    /// 24-hour trading volume in USD.
    pub volume_24h: Decimal,
    /// Event page on polymarket.com.
    pub url: String,
    /// Timestamp when the opportunity was detected.
    pub detected_at: DateTime<Utc>,
}

impl ArbitrageOpportunity {
    /// Profit as a percentage of the $1.00 payout.
    pub fn profit_pct(&self) -> Decimal {
        self.potential_profit * Decimal::ONE_HUNDRED
    }
}

/// Evaluate a single market for mispricing.
///
/// Returns `None` for anything that is not an opportunity: unparseable or
/// missing prices, fewer than two outcomes, combined price at or above the
/// threshold, or volume below the floor. Absence is never an error.
pub fn evaluate_market(
    event: &GammaEvent,
    market: &GammaMarket,
    min_volume: Decimal,
    threshold: Decimal,
) -> Option<ArbitrageOpportunity> {
    let prices = market.outcome_prices()?;
    if prices.len() < 2 {
        return None;
    }

    let yes_price = prices[0];
    let no_price = prices[1];
    let combined_price = yes_price + no_price;

    if combined_price >= threshold {
        return None;
    }

    let volume_24h = market.volume();
    if volume_24h < min_volume {
        return None;
    }

    Some(ArbitrageOpportunity {
        market_id: market.id.clone(),
        event_title: event
            .title
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        question: market.question.clone().unwrap_or_default(),
        yes_price,
        no_price,
        combined_price,
        potential_profit: Decimal::ONE - combined_price,
        volume_24h,
        url: format!("{}/{}", POLYMARKET_EVENT_URL, event.slug),
        detected_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event() -> GammaEvent {
        GammaEvent {
            id: "901".to_string(),
            title: Some("Will it rain tomorrow?".to_string()),
            slug: "will-it-rain-tomorrow".to_string(),
            markets: vec![],
        }
    }

    fn test_market(prices: &str, volume: Decimal) -> GammaMarket {
        GammaMarket {
            id: "1024".to_string(),
            question: Some("Will it rain tomorrow?".to_string()),
            outcome_prices: Some(prices.to_string()),
            volume_24hr: Some(volume),
        }
    }

    fn evaluate(market: &GammaMarket) -> Option<ArbitrageOpportunity> {
        evaluate_market(
            &test_event(),
            market,
            DEFAULT_MIN_VOLUME,
            COMBINED_PRICE_THRESHOLD,
        )
    }

    #[test]
    fn finds_opportunity_when_underpriced() {
        let market = test_market(r#"["0.40", "0.45"]"#, dec!(50000));

        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.market_id, "1024");
        assert_eq!(opp.event_title, "Will it rain tomorrow?");
        assert_eq!(opp.yes_price, dec!(0.40));
        assert_eq!(opp.no_price, dec!(0.45));
        assert_eq!(opp.combined_price, dec!(0.85));
        assert_eq!(opp.potential_profit, dec!(0.15));
        assert_eq!(opp.volume_24h, dec!(50000));
        assert_eq!(opp.url, "https://polymarket.com/event/will-it-rain-tomorrow");
    }

    #[test]
    fn excluded_below_volume_floor() {
        let market = test_market(r#"["0.40", "0.45"]"#, dec!(5000));
        assert!(evaluate(&market).is_none());
    }

    #[test]
    fn excluded_at_even_money() {
        // 0.50 + 0.50 = 1.00, not an arbitrage
        let market = test_market(r#"["0.50", "0.50"]"#, dec!(50000));
        assert!(evaluate(&market).is_none());
    }

    #[test]
    fn threshold_is_strict() {
        // Combined exactly at the threshold is excluded
        let market = test_market(r#"["0.49", "0.50"]"#, dec!(50000));
        assert!(evaluate(&market).is_none());

        let market = test_market(r#"["0.489", "0.50"]"#, dec!(50000));
        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.potential_profit, dec!(0.011));
    }

    #[test]
    fn unparseable_prices_are_skipped() {
        let market = test_market("total garbage", dec!(50000));
        assert!(evaluate(&market).is_none());
    }

    #[test]
    fn single_price_is_skipped() {
        let market = test_market(r#"["0.40"]"#, dec!(50000));
        assert!(evaluate(&market).is_none());
    }

    #[test]
    fn extra_prices_are_ignored() {
        let market = test_market(r#"["0.30", "0.40", "0.90"]"#, dec!(50000));

        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.combined_price, dec!(0.70));
    }

    #[test]
    fn missing_volume_counts_as_zero() {
        let market = GammaMarket {
            volume_24hr: None,
            ..test_market(r#"["0.40", "0.45"]"#, dec!(0))
        };

        assert!(evaluate(&market).is_none());

        let opp = evaluate_market(
            &test_event(),
            &market,
            Decimal::ZERO,
            COMBINED_PRICE_THRESHOLD,
        )
        .unwrap();
        assert_eq!(opp.volume_24h, Decimal::ZERO);
    }

    #[test]
    fn missing_title_defaults_to_unknown() {
        let event = GammaEvent {
            title: None,
            ..test_event()
        };
        let market = test_market(r#"["0.40", "0.45"]"#, dec!(50000));

        let opp = evaluate_market(&event, &market, DEFAULT_MIN_VOLUME, COMBINED_PRICE_THRESHOLD)
            .unwrap();
        assert_eq!(opp.event_title, "Unknown");
    }

    #[test]
    fn missing_question_defaults_to_empty() {
        let market = GammaMarket {
            question: None,
            ..test_market(r#"["0.40", "0.45"]"#, dec!(50000))
        };

        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.question, "");
    }

    #[test]
    fn negative_prices_are_not_rejected() {
        // Prices out of [0, 1] flow through the arithmetic unchecked
        let market = test_market(r#"["-0.10", "0.50"]"#, dec!(50000));

        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.combined_price, dec!(0.40));
        assert_eq!(opp.potential_profit, dec!(0.60));
    }

    #[test]
    fn profit_pct_is_share_of_payout() {
        let market = test_market(r#"["0.40", "0.45"]"#, dec!(50000));

        let opp = evaluate(&market).unwrap();
        assert_eq!(opp.profit_pct(), dec!(15.00));
    }
}
