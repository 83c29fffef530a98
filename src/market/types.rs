//! Market-related types for two-outcome betting pools.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::OddsError;
use crate::pricing::allocator;

/// Outcome of a two-outcome market.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// First outcome.
    #[strum(to_string = "A", serialize = "a")]
    #[default]
    A,
    /// Second outcome.
    #[strum(to_string = "B", serialize = "b")]
    B,
}

impl Outcome {
    /// Get the opposite outcome.
    pub fn opposite(&self) -> Self {
        match self {
            Outcome::A => Outcome::B,
            Outcome::B => Outcome::A,
        }
    }
}

/// Odds and pooled liquidity for a two-outcome market.
///
/// Constructed through [`TwoOutcomeMarket::new`], so a value of this type
/// always has non-negative odds that are not both zero and non-negative
/// liquidity. Both shares of the pool are computed once, up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwoOutcomeMarket {
    odd_a: Decimal,
    odd_b: Decimal,
    liquidity: Decimal,
    liquidity_a: Decimal,
    liquidity_b: Decimal,
}

impl TwoOutcomeMarket {
    /// Create a validated market.
    pub fn new(odd_a: Decimal, odd_b: Decimal, liquidity: Decimal) -> Result<Self, OddsError> {
        let (liquidity_a, liquidity_b) = allocator::split(odd_a, odd_b, liquidity)?;
        Ok(Self {
            odd_a,
            odd_b,
            liquidity,
            liquidity_a,
            liquidity_b,
        })
    }

    /// Total pool size.
    pub fn liquidity(&self) -> Decimal {
        self.liquidity
    }

    /// Get the odd for a given outcome.
    pub fn odds(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::A => self.odd_a,
            Outcome::B => self.odd_b,
        }
    }

    /// Share of the pool attributed to a given outcome.
    pub fn liquidity_for(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::A => self.liquidity_a,
            Outcome::B => self.liquidity_b,
        }
    }

    /// Both shares of the pool, as returned by [`allocator::split`].
    pub fn split(&self) -> (Decimal, Decimal) {
        (self.liquidity_a, self.liquidity_b)
    }
}
