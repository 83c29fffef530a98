//! Odd slippage caused by a bet consuming pool liquidity.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::OddsError;

/// Reduction of `odd` caused by placing `bet_size` against `liquidity`.
///
/// Computed as `min(odd, odd * bet_size / (liquidity - bet_size))`, so the
/// slip never exceeds the odd itself. A bet that would take the whole pool
/// (`bet_size >= liquidity`) has no finite slip and is rejected. A quotient
/// too large for a `Decimal` is necessarily above `odd` and caps to it.
#[instrument(level = "debug", skip_all, fields(odd = %odd, liquidity = %liquidity, bet_size = %bet_size))]
pub fn odd_slip(odd: Decimal, liquidity: Decimal, bet_size: Decimal) -> Result<Decimal, OddsError> {
    if odd < Decimal::ZERO {
        return Err(OddsError::InvalidOdds {
            odd_a: odd,
            odd_b: Decimal::ZERO,
        });
    }

    if bet_size < Decimal::ZERO {
        return Err(OddsError::InvalidBetSize(bet_size));
    }

    if bet_size >= liquidity {
        return Err(OddsError::BetExhaustsPool {
            bet_size,
            liquidity,
        });
    }

    let remaining = liquidity - bet_size;
    let slip = match odd.checked_mul(bet_size) {
        Some(product) => product.checked_div(remaining).unwrap_or(odd).min(odd),
        // Overflowing product: the cap applies once bet_size / remaining reaches one.
        None => match bet_size.checked_div(remaining) {
            Some(ratio) if ratio < Decimal::ONE => odd * ratio,
            _ => odd,
        },
    };

    debug!(remaining = %remaining, slip = %slip, "Computed odd slip");
    Ok(slip)
}

/// Odd left after the slip of `bet_size` is applied.
pub fn effective_odd(
    odd: Decimal,
    liquidity: Decimal,
    bet_size: Decimal,
) -> Result<Decimal, OddsError> {
    Ok(odd - odd_slip(odd, liquidity, bet_size)?)
}
