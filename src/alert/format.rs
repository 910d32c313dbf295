//! Discord message formatting for arbitrage alerts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::arbitrage::ArbitrageOpportunity;

/// Render the Discord alert for the top-ranked opportunity.
///
/// `total` is the size of the full ranked list the opportunity came from.
pub fn render_alert(top: &ArbitrageOpportunity, total: usize) -> String {
    format!(
        "🚨 **ARBITRAGE DETECTED** 🚨\n\
        **{}**\n\
        {}\n\
        \n\
        💰 **Prices:** Yes ${:.4} | No ${:.4} | Combined ${:.4}\n\
        📊 **Potential Profit:** ${:.4} ({:.2}%)\n\
        📈 **24h Volume:** ${}\n\
        🔗 [Trade on Polymarket]({})\n\
        \n\
        _Found {} opportunities. Run `/arbitrage` for the full list._",
        top.event_title,
        top.question,
        top.yes_price,
        top.no_price,
        top.combined_price,
        top.potential_profit,
        top.profit_pct(),
        group_thousands(top.volume_24h),
        top.url,
        total
    )
}

/// Format a dollar amount with thousands separators and no decimals.
fn group_thousands(value: Decimal) -> String {
    let whole = value.round().to_i128().unwrap_or(0);
    let digits = whole.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if whole < 0 {
        out.insert(0, '-');
    }
    out
}
