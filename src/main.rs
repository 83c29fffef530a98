//! Two-outcome odds calculator entry point.

use clap::{Args as ClapArgs, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dynamic_odds::config::{Config, DEFAULT_LOG_LEVEL};
use dynamic_odds::error::AppError;
use dynamic_odds::market::Outcome;
use dynamic_odds::metrics;
use dynamic_odds::pricing::{bet_ladder, quote_bet, slip_curve};

/// Liquidity split and odd-slippage calculator.
#[derive(Parser, Debug)]
#[command(name = "dynamic-odds")]
#[command(about = "Liquidity split and odd slippage for two-outcome markets")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print Prometheus metrics for this run to stderr on exit.
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report liquidity A and the odd left after a trial bet (default).
    Quote {
        #[command(flatten)]
        market: MarketArgs,

        /// Emit the full quote as JSON instead of the two-line report.
        #[arg(long)]
        json: bool,
    },

    /// Print the slip curve for bet sizes up to the trial bet.
    Sweep {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of evenly spaced bet sizes.
        #[arg(long, default_value = "10")]
        steps: u32,
    },

    /// Check configuration validity.
    CheckConfig,
}

/// Overrides for the configured market and trial bet.
#[derive(ClapArgs, Debug, Default)]
struct MarketArgs {
    /// Odd for outcome A.
    #[arg(long)]
    odd_a: Option<Decimal>,

    /// Odd for outcome B.
    #[arg(long)]
    odd_b: Option<Decimal>,

    /// Total pool liquidity.
    #[arg(long)]
    liquidity: Option<Decimal>,

    /// Trial bet size.
    #[arg(long)]
    bet_size: Option<Decimal>,

    /// Outcome to bet on (a or b).
    #[arg(long, default_value = "a")]
    outcome: Outcome,
}

impl MarketArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(odd_a) = self.odd_a {
            config.odd_a = odd_a;
        }
        if let Some(odd_b) = self.odd_b {
            config.odd_b = odd_b;
        }
        if let Some(liquidity) = self.liquidity {
            config.liquidity = liquidity;
        }
        if let Some(bet_size) = self.bet_size {
            config.bet_size = bet_size;
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if args.verbose {
        EnvFilter::new("dynamic_odds=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Initialize metrics
    let prometheus = if args.metrics {
        Some(metrics::install_prometheus()?)
    } else {
        None
    };
    metrics::init_metrics();

    let result = match args.command {
        Some(Command::Quote { market, json }) => cmd_quote(&market, json),
        Some(Command::Sweep { market, steps }) => cmd_sweep(&market, steps),
        Some(Command::CheckConfig) => cmd_check_config(),
        None => cmd_quote(&MarketArgs::default(), false),
    };

    if let Some(handle) = prometheus {
        eprint!("{}", handle.render());
    }

    result
}

/// Load configuration, apply CLI overrides and validate.
fn load_config(overrides: &MarketArgs) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(AppError::from)?;
    overrides.apply(&mut config);
    let config = config.into_validated()?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Report liquidity for the chosen outcome and its odd after the trial bet.
fn cmd_quote(overrides: &MarketArgs, json: bool) -> anyhow::Result<()> {
    let config = load_config(overrides)?;
    let market = config.market()?;
    let outcome = overrides.outcome;

    let quote = quote_bet(&market, outcome, config.bet_size)?;
    info!(
        outcome = %outcome,
        slip = %quote.slip,
        effective_odd = %quote.effective_odd,
        "Quote computed"
    );

    if json {
        println!("{}", quote.to_json()?);
    } else {
        println!("{}", quote.report());
    }

    Ok(())
}

/// Print the slip curve for evenly spaced bets up to the trial bet.
fn cmd_sweep(overrides: &MarketArgs, steps: u32) -> anyhow::Result<()> {
    let config = load_config(overrides)?;
    let market = config.market()?;
    let outcome = overrides.outcome;

    let liquidity = market.liquidity_for(outcome);
    println!("======================================================================");
    println!(
        "SLIP CURVE - outcome {} (odd {}, liquidity {}; outcome {} holds {})",
        outcome,
        market.odds(outcome).normalize(),
        liquidity.normalize(),
        outcome.opposite(),
        market.liquidity_for(outcome.opposite()).normalize()
    );
    println!("======================================================================");
    println!(
        "{:>16} {:>8} {:>12} {:>14} {:>8}",
        "bet", "pool%", "slip", "effective_odd", "slip%"
    );

    let sizes = bet_ladder(config.bet_size, steps);
    for (bet_size, quote) in sizes.iter().zip(slip_curve(&market, outcome, &sizes)) {
        match quote {
            Ok(q) => println!(
                "{:>16} {:>8} {:>12} {:>14} {:>8}",
                bet_size.normalize(),
                q.pool_usage_pct().round_dp(2).normalize(),
                q.slip.round_dp(6).normalize(),
                q.effective_odd.round_dp(6).normalize(),
                q.slip_pct().round_dp(2).normalize()
            ),
            Err(e) => {
                warn!(bet_size = %bet_size, error = %e, "Bet size not quotable");
                println!("{:>16} {}", bet_size.normalize(), e);
            }
        }
    }

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DYNAMIC ODDS - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let market = config.market()?;
    let (liquidity_a, liquidity_b) = market.split();

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Odd A: {}", config.odd_a.normalize());
    println!("  Odd B: {}", config.odd_b.normalize());
    println!("  Liquidity: {}", config.liquidity.normalize());
    println!("    A share: {}", liquidity_a.normalize());
    println!("    B share: {}", liquidity_b.normalize());
    println!("  Bet Size: {}", config.bet_size.normalize());
    println!("  Log Level: {}", config.rust_log);
    if config.bet_size >= liquidity_a.min(liquidity_b) {
        println!("  WARNING: bet size exhausts at least one side of the pool");
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
