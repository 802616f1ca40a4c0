//! Rates CLI
//!
//! Fetches EUR/USD exchange rates for the last N days and prints them as JSON.

mod config;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use privatbank_client::{DEFAULT_BASE_URL, PrivatBankClient};
use rates_hex::RateAggregator;
use rates_types::{BatchResult, CurrencyCode, RateError, RateSource};

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "rates")]
#[command(author, version, about = "Fetch EUR and USD exchange rates from PrivatBank", long_about = None)]
struct Cli {
    /// Number of days to retrieve exchange rates for (up to 10)
    days: u32,

    /// Most recent date to fetch (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Currencies to report (default: EUR,USD)
    #[arg(short, long, value_delimiter = ',')]
    currency: Vec<CurrencyCode>,

    /// Base URL of the exchange rates API
    #[arg(long, env = "PRIVATBANK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,rates_cli=info,rates_hex=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the result, logs go to stderr
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn render(batch: &BatchResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(batch)
    } else {
        serde_json::to_string(batch)
    }
}

/// Runs one batch over `source` and returns the text for stdout.
///
/// A rejected day count becomes an `Error: ...` message rather than an
/// error, so the process still exits cleanly. `source` is dropped before
/// this returns.
async fn run<S: RateSource>(source: S, config: &Config) -> Result<String> {
    let aggregator =
        RateAggregator::new(source).with_currencies(config.currencies.iter().copied());

    match aggregator
        .fetch_recent(config.reference_date, config.days)
        .await
    {
        Ok(batch) => Ok(render(&batch, config.pretty)?),
        Err(RateError::Validation(err)) => Ok(format!("Error: {}", err)),
        Err(err) => Err(err.into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = Config::from_cli(cli, Local::now().date_naive());
    tracing::info!(
        "Fetching {} days of rates up to {} from {}",
        config.days,
        config.reference_date,
        config.api_url
    );

    let output = run(PrivatBankClient::new(&config.api_url), &config).await?;
    println!("{}", output);
    Ok(())
}
