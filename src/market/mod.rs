//! Market module for two-outcome pools.

pub mod types;

pub use types::{Outcome, TwoOutcomeMarket};
