//! Integration tests for the odds calculator public API.
//!
//! Run with: cargo test --test integration

use dynamic_odds::config::Config;
use dynamic_odds::error::{AppError, OddsError};
use dynamic_odds::market::{Outcome, TwoOutcomeMarket};
use dynamic_odds::pricing::{allocate, bet_ladder, effective_odd, odd_slip, quote_bet, slip_curve};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Market built from the default configuration.
fn default_market() -> TwoOutcomeMarket {
    Config::default()
        .into_validated()
        .and_then(|c| Ok(c.market()?))
        .expect("default config is valid")
}

#[test]
fn reference_scenario_end_to_end() {
    let config = Config::default();
    let liquidity_a = allocate(config.odd_a, config.odd_b, config.liquidity).unwrap();
    assert_eq!(liquidity_a, dec!(750000));

    let slip = odd_slip(config.odd_a, liquidity_a, config.bet_size).unwrap();
    assert_eq!(slip, dec!(2));
    assert_eq!(config.odd_a - slip, dec!(1));
}

#[test]
fn quote_matches_free_functions() {
    let market = default_market();
    let quote = quote_bet(&market, Outcome::A, dec!(300000)).unwrap();

    assert_eq!(
        (quote.outcome, quote.odd, quote.liquidity, quote.slip, quote.effective_odd),
        (
            Outcome::A,
            dec!(3),
            allocate(dec!(3), dec!(1), dec!(1000000)).unwrap(),
            odd_slip(dec!(3), dec!(750000), dec!(300000)).unwrap(),
            effective_odd(dec!(3), dec!(750000), dec!(300000)).unwrap(),
        )
    );
}

#[test]
fn allocations_partition_pool_for_both_orders() {
    let pool = dec!(1000000);
    for (a, b) in [(dec!(3), dec!(1)), (dec!(2), dec!(2)), (dec!(0.5), dec!(4.5))] {
        let total = allocate(a, b, pool).unwrap() + allocate(b, a, pool).unwrap();
        assert_eq!(total, pool);
    }
}

#[test]
fn allocations_on_repeating_ratios_stay_within_last_digit() {
    let pool = dec!(1000000);
    for i in 1..40 {
        for j in 1..40 {
            let a = Decimal::from(i) / dec!(7);
            let b = Decimal::from(j) / dec!(3);
            let total = allocate(a, b, pool).unwrap() + allocate(b, a, pool).unwrap();
            assert!((total - pool).abs() < dec!(0.00000000000000000001));
        }
    }
}

#[test]
fn default_run_reports_two_lines() {
    let market = default_market();
    let quote = quote_bet(&market, Outcome::A, Config::default().bet_size).unwrap();

    assert_eq!(quote.report(), "liquidity A: 750000\n1");
}

#[test]
fn max_liquidity_quote_returns_a_result() {
    let config = Config {
        liquidity: Decimal::MAX,
        ..Config::default()
    };
    let market = config.into_validated().unwrap().market().unwrap();

    let quote = quote_bet(&market, Outcome::A, dec!(300000)).unwrap();
    assert!(quote.slip < dec!(0.0001));
    assert!(quote.effective_odd <= dec!(3));
}

#[test]
fn bet_at_boundary_is_a_domain_error() {
    let market = default_market();
    let liquidity_a = market.liquidity_for(Outcome::A);

    assert_eq!(
        quote_bet(&market, Outcome::A, liquidity_a),
        Err(OddsError::BetExhaustsPool {
            bet_size: dec!(750000),
            liquidity: dec!(750000),
        })
    );
}

#[test]
fn odds_error_converts_into_app_error() {
    let err: AppError = odd_slip(dec!(1), dec!(10), dec!(20)).unwrap_err().into();
    assert!(matches!(err, AppError::Odds(OddsError::BetExhaustsPool { .. })));
    assert!(err.to_string().starts_with("odds error: bet exhausts pool"));
}

#[test]
fn slip_grows_with_bet_size() {
    let market = default_market();
    let ladder = bet_ladder(dec!(600000), 6);
    let slips: Vec<Decimal> = slip_curve(&market, Outcome::A, &ladder)
        .into_iter()
        .map(|q| q.unwrap().slip)
        .collect();

    assert!(slips.windows(2).all(|w| w[0] <= w[1]));
    assert!(slips.iter().all(|s| *s <= dec!(3)));
}
