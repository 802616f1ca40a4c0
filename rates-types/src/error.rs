//! Error types for the rate fetcher.

use crate::domain::{CurrencyCode, DateKey};
use crate::ports::SourceError;

/// Input errors detected before any fetch is issued.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Number of days should not exceed {max} (requested {requested})")]
    TooManyDays { requested: u32, max: u32 },

    #[error("Date {offset} days before the reference date is out of range")]
    DateOutOfRange { offset: u32 },

    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// A rate document that does not have the expected structure.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("Missing currency {currency} in rates for {date}")]
    MissingCurrency { currency: CurrencyCode, date: String },

    #[error("Currency {currency} has no {field}")]
    MissingRate {
        currency: CurrencyCode,
        field: &'static str,
    },

    #[error("Invalid date {0:?}, expected DD.MM.YYYY")]
    InvalidDate(String),

    #[error("Requested rates for {requested}, got a document for {returned}")]
    DateMismatch { requested: DateKey, returned: String },
}

/// Application-level errors returned by the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
