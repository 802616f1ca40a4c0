//! # Rates Types
//!
//! Domain types and port traits for the exchange rate batch fetcher.
//! This crate has no IO dependencies - only data structures, parsing
//! rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (DateKey, CurrencyCode, documents, entries)
//! - `ports/` - Trait definitions that rate source adapters implement
//! - `error/` - Validation, shape, and application error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BatchResult, CurrencyCode, DateKey, FormattedEntry, MAX_DAYS, RatePair, RawRate,
    RawRateDocument,
};
pub use error::{RateError, ShapeError, ValidationError};
pub use ports::{RateSource, SourceError};
