//! Slip quotes for a bet against one side of a market.

use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, instrument};

use super::slippage::odd_slip;
use crate::error::OddsError;
use crate::market::{Outcome, TwoOutcomeMarket};
use crate::metrics;

/// Priced bet against one outcome's share of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlipQuote {
    /// Outcome the bet is placed on.
    pub outcome: Outcome,
    /// Quoted odd before the bet.
    pub odd: Decimal,
    /// Liquidity backing this outcome.
    pub liquidity: Decimal,
    /// Bet size.
    pub bet_size: Decimal,
    /// Reduction of the odd caused by the bet.
    pub slip: Decimal,
    /// Odd after slip (odd - slip).
    pub effective_odd: Decimal,
    /// Timestamp when the quote was computed.
    #[serde(with = "time::serde::rfc3339")]
    pub quoted_at: OffsetDateTime,
}

impl SlipQuote {
    /// Slip as a percentage of the quoted odd.
    pub fn slip_pct(&self) -> Decimal {
        if self.odd.is_zero() {
            Decimal::ZERO
        } else {
            (self.slip / self.odd) * Decimal::ONE_HUNDRED
        }
    }

    /// Two-line plain report: the outcome's liquidity, then the effective odd.
    pub fn report(&self) -> String {
        format!(
            "liquidity {}: {}\n{}",
            self.outcome,
            self.liquidity.normalize(),
            self.effective_odd.normalize()
        )
    }

    /// Pretty-printed JSON rendering of the quote.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Share of the outcome's liquidity consumed by the bet.
    pub fn pool_usage_pct(&self) -> Decimal {
        if self.liquidity.is_zero() {
            Decimal::ZERO
        } else {
            (self.bet_size / self.liquidity) * Decimal::ONE_HUNDRED
        }
    }
}

/// Quote a bet of `bet_size` on `outcome`.
#[instrument(skip(market), fields(outcome = %outcome, bet_size = %bet_size))]
pub fn quote_bet(
    market: &TwoOutcomeMarket,
    outcome: Outcome,
    bet_size: Decimal,
) -> Result<SlipQuote, OddsError> {
    let _timer = metrics::timer_quote();

    let odd = market.odds(outcome);
    let liquidity = market.liquidity_for(outcome);

    let slip = match odd_slip(odd, liquidity, bet_size) {
        Ok(slip) => slip,
        Err(e) => {
            metrics::inc_quotes_rejected();
            debug!(error = %e, "Quote rejected");
            return Err(e);
        }
    };

    metrics::inc_quotes_computed();

    Ok(SlipQuote {
        outcome,
        odd,
        liquidity,
        bet_size,
        slip,
        effective_odd: odd - slip,
        quoted_at: OffsetDateTime::now_utc(),
    })
}

/// Quote each bet size in `bet_sizes`, keeping per-size failures.
pub fn slip_curve(
    market: &TwoOutcomeMarket,
    outcome: Outcome,
    bet_sizes: &[Decimal],
) -> Vec<Result<SlipQuote, OddsError>> {
    bet_sizes
        .iter()
        .map(|&bet_size| quote_bet(market, outcome, bet_size))
        .collect()
}

/// Evenly spaced bet sizes from `max / steps` up to `max`.
pub fn bet_ladder(max: Decimal, steps: u32) -> Vec<Decimal> {
    if steps == 0 || max <= Decimal::ZERO {
        return Vec::new();
    }

    let increment = max / Decimal::from(steps);
    (1..=steps)
        .map(|i| match increment.checked_mul(Decimal::from(i)) {
            Some(size) if i < steps => size.min(max),
            _ => max,
        })
        .collect()
}
