//! Event and market types returned by the Gamma API.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

/// An event returned by the Gamma `/events` endpoint.
///
/// Deserialization is deliberately lenient: every field carries a default so
/// a sparse record never fails the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaEvent {
    /// Event identifier.
    #[serde(default)]
    pub id: String,

    /// Event title. Missing in some records.
    #[serde(default)]
    pub title: Option<String>,

    /// URL slug on polymarket.com.
    #[serde(default)]
    pub slug: String,

    /// Markets nested under this event.
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

/// A binary market nested under a Gamma event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    /// Market identifier.
    #[serde(default)]
    pub id: String,

    /// Market question text.
    #[serde(default)]
    pub question: Option<String>,

    /// Outcome prices as a JSON-encoded array of decimal strings,
    /// e.g. `"[\"0.40\", \"0.45\"]"`.
    #[serde(default)]
    pub outcome_prices: Option<String>,

    /// 24-hour trading volume in USD.
    #[serde(default, alias = "volume24hr")]
    pub volume_24hr: Option<Decimal>,
}

impl GammaMarket {
    /// Parse the string-encoded outcome prices.
    ///
    /// The field arrives as JSON inside JSON and is parsed strictly as such,
    /// never evaluated. Returns `None` if the field is missing, is not a JSON
    /// array of strings, or any element is not a decimal number.
    pub fn outcome_prices(&self) -> Option<Vec<Decimal>> {
        let raw = self.outcome_prices.as_deref()?;
        let parts: Vec<String> = serde_json::from_str(raw)
            .map_err(|e| debug!(market_id = %self.id, error = %e, "unparseable outcomePrices"))
            .ok()?;
        parts.iter().map(|p| p.trim().parse::<Decimal>().ok()).collect()
    }

    /// 24-hour volume, treating a missing field as zero.
    pub fn volume(&self) -> Decimal {
        self.volume_24hr.unwrap_or(Decimal::ZERO)
    }
}
