//! Pricing module for two-outcome pools.
//!
//! This module handles:
//! - Splitting liquidity between outcomes by odds
//! - Estimating odd slip for a bet
//! - Building quotes and slip curves

pub mod allocator;
pub mod quote;
pub mod slippage;

pub use allocator::{allocate, split};
pub use quote::{bet_ladder, quote_bet, slip_curve, SlipQuote};
pub use slippage::{effective_odd, odd_slip};
