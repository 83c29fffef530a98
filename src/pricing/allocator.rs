//! Splitting a liquidity pool between two outcomes.

use rust_decimal::Decimal;

use crate::error::OddsError;

/// Share of `liquidity` attributed to outcome A.
///
/// Computed as `liquidity * odd_a / (odd_a + odd_b)`. Multiplying before
/// dividing keeps integral splits exact; when the product overflows the
/// share `odd_a / (odd_a + odd_b)` (at most one) is applied instead.
///
/// Non-terminating ratios are rounded to 28 significant digits, so
/// `allocate(a, b, l) + allocate(b, a, l)` can miss `l` in the last digit.
/// Use [`split`] when the two shares must sum exactly.
pub fn allocate(odd_a: Decimal, odd_b: Decimal, liquidity: Decimal) -> Result<Decimal, OddsError> {
    if odd_a < Decimal::ZERO || odd_b < Decimal::ZERO {
        return Err(OddsError::InvalidOdds { odd_a, odd_b });
    }

    let total_odds = odd_a
        .checked_add(odd_b)
        .ok_or(OddsError::OddsOverflow { odd_a, odd_b })?;
    if total_odds.is_zero() {
        return Err(OddsError::InvalidOdds { odd_a, odd_b });
    }

    if liquidity < Decimal::ZERO {
        return Err(OddsError::InvalidLiquidity(liquidity));
    }

    match liquidity.checked_mul(odd_a) {
        Some(product) => Ok(product / total_odds),
        None => Ok(liquidity * (odd_a / total_odds)),
    }
}

/// Shares of `liquidity` for outcomes A and B.
///
/// B's share is the remainder `liquidity - liquidity_a`, so the shares sum
/// to `liquidity` exactly whenever that remainder is representable, and to
/// within one unit in the last digit otherwise.
pub fn split(
    odd_a: Decimal,
    odd_b: Decimal,
    liquidity: Decimal,
) -> Result<(Decimal, Decimal), OddsError> {
    let liquidity_a = allocate(odd_a, odd_b, liquidity)?;
    Ok((liquidity_a, liquidity - liquidity_a))
}
