//! Application configuration loaded from environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, OddsError};
use crate::market::TwoOutcomeMarket;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Market ===
    /// Odd for outcome A.
    #[serde(default = "default_odd_a")]
    pub odd_a: Decimal,

    /// Odd for outcome B.
    #[serde(default = "default_odd_b")]
    pub odd_b: Decimal,

    /// Total pool liquidity shared by both outcomes.
    #[serde(default = "default_liquidity")]
    pub liquidity: Decimal,

    // === Trial Bet ===
    /// Bet size used for slip quotes.
    #[serde(default = "default_bet_size")]
    pub bet_size: Decimal,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_odd_a() -> Decimal {
    Decimal::new(3, 0)
}

fn default_odd_b() -> Decimal {
    Decimal::ONE
}

fn default_liquidity() -> Decimal {
    Decimal::new(1_000_000, 0)
}

fn default_bet_size() -> Decimal {
    Decimal::new(300_000, 0)
}

/// Log level used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odd_a: default_odd_a(),
            odd_b: default_odd_b(),
            liquidity: default_liquidity(),
            bet_size: default_bet_size(),
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.odd_a < Decimal::ZERO || self.odd_b < Decimal::ZERO {
            return Err("ODD_A and ODD_B must not be negative".to_string());
        }

        if self.odd_a.is_zero() && self.odd_b.is_zero() {
            return Err("ODD_A and ODD_B must not both be zero".to_string());
        }

        if self.liquidity <= Decimal::ZERO {
            return Err("LIQUIDITY must be positive".to_string());
        }

        if self.bet_size < Decimal::ZERO {
            return Err("BET_SIZE must not be negative".to_string());
        }

        Ok(())
    }

    /// Validate, converting failures into [`AppError::InvalidConfig`].
    pub fn into_validated(self) -> crate::Result<Self> {
        self.validate().map_err(AppError::InvalidConfig)?;
        Ok(self)
    }

    /// Build the market described by this configuration.
    pub fn market(&self) -> Result<TwoOutcomeMarket, OddsError> {
        TwoOutcomeMarket::new(self.odd_a, self.odd_b, self.liquidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_values_match_reference_market() {
        assert_eq!(default_odd_a(), dec!(3));
        assert_eq!(default_odd_b(), dec!(1));
        assert_eq!(default_liquidity(), dec!(1000000));
        assert_eq!(default_bet_size(), dec!(300000));
        assert_eq!(default_log_level(), "warn");
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.market().unwrap().liquidity(), dec!(1000000));
    }

    #[test]
    fn validate_rejects_both_zero_odds() {
        let config = Config {
            odd_a: dec!(0),
            odd_b: dec!(0),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_liquidity() {
        let config = Config {
            liquidity: dec!(0),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_bet() {
        let config = Config {
            bet_size: dec!(-5),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn into_validated_reports_invalid_config() {
        let config = Config {
            liquidity: dec!(-1),
            ..Config::default()
        };

        assert!(matches!(
            config.into_validated(),
            Err(AppError::InvalidConfig(_))
        ));
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("ODD_A".to_string(), "2.5".to_string()),
            ("BET_SIZE".to_string(), "1000".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.odd_a, dec!(2.5));
        assert_eq!(config.odd_b, dec!(1));
        assert_eq!(config.bet_size, dec!(1000));
    }
}
