//! Run configuration resolved from the command line and environment.

use chrono::NaiveDate;
use rates_types::CurrencyCode;

use crate::Cli;

/// Everything one invocation needs, with defaults filled in.
#[derive(Debug)]
pub struct Config {
    pub api_url: String,
    pub reference_date: NaiveDate,
    pub days: u32,
    pub currencies: Vec<CurrencyCode>,
    pub pretty: bool,
}

impl Config {
    /// Resolves parsed arguments, using `today` when no date was given.
    pub fn from_cli(cli: Cli, today: NaiveDate) -> Self {
        let currencies = if cli.currency.is_empty() {
            CurrencyCode::DEFAULT_SELECTION.to_vec()
        } else {
            cli.currency
        };

        Self {
            api_url: cli.api_url,
            reference_date: cli.date.unwrap_or(today),
            days: cli.days,
            currencies,
            pretty: cli.pretty,
        }
    }
}
