//! Port traits (interfaces for adapters).
//!
//! The aggregator depends on these traits, not on a concrete HTTP client.

mod rate_source;

pub use rate_source::{RateSource, SourceError};
