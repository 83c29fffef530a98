//! Unified error types for the odds calculator.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pricing error.
    #[error("odds error: {0}")]
    Odds(#[from] OddsError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Domain errors raised by the allocator and slip estimator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// Odds are negative or sum to zero.
    #[error("invalid odds: odd_a={odd_a}, odd_b={odd_b}")]
    InvalidOdds {
        /// Odd for outcome A (or the single odd being priced).
        odd_a: Decimal,
        /// Odd for outcome B (zero when pricing a single odd).
        odd_b: Decimal,
    },

    /// Liquidity is negative.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(Decimal),

    /// Bet size is negative.
    #[error("invalid bet size: {0}")]
    InvalidBetSize(Decimal),

    /// Sum of the odds does not fit in a `Decimal`.
    #[error("odds overflow: odd_a={odd_a} + odd_b={odd_b}")]
    OddsOverflow {
        /// Odd for outcome A.
        odd_a: Decimal,
        /// Odd for outcome B.
        odd_b: Decimal,
    },

    /// Bet would consume the whole pool (or more).
    #[error("bet exhausts pool: bet_size={bet_size} >= liquidity={liquidity}")]
    BetExhaustsPool {
        /// Requested bet size.
        bet_size: Decimal,
        /// Liquidity backing the odd.
        liquidity: Decimal,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
