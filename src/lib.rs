//! Liquidity split and odd-slippage calculator for two-outcome markets.
//!
//! A pool of liquidity is shared between two mutually exclusive outcomes in
//! proportion to their odds. A bet against one side erodes that side's odd:
//!
//! ```text
//! odd A: 3, odd B: 1, pool: 1,000,000
//! ─────────────────────────────────────
//! liquidity A = 1,000,000 * 3 / 4      = 750,000
//! slip(300,000) = min(3, 3 * 300,000 / 450,000) = 2
//! effective odd = 3 - 2                = 1
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Two-outcome market types
//! - [`pricing`]: Liquidity allocation, slip estimation, quotes
//! - [`metrics`]: Prometheus counters and timers

pub mod config;
pub mod error;
pub mod market;
pub mod metrics;
pub mod pricing;

pub use config::Config;
pub use error::{AppError, OddsError, Result};
pub use market::{Outcome, TwoOutcomeMarket};
pub use pricing::{allocate, odd_slip, quote_bet, SlipQuote};
