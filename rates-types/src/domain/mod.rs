//! Domain models for the rate fetcher.

pub mod currency;
pub mod date_key;
pub mod document;
pub mod entry;

pub use currency::CurrencyCode;
pub use date_key::{DateKey, MAX_DAYS};
pub use document::{RawRate, RawRateDocument};
pub use entry::{BatchResult, FormattedEntry, RatePair};
