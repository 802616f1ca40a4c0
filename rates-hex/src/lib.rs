//! # Rates Hex
//!
//! The application core of the rate fetcher:
//! - `service` - [`RateAggregator`], the concurrent fan-out/fan-in over a [`RateSource`]
//! - `formatter` - reshaping raw documents into [`FormattedEntry`] values
//!
//! [`RateSource`]: rates_types::RateSource
//! [`FormattedEntry`]: rates_types::FormattedEntry

pub mod formatter;
pub mod service;


pub use formatter::{format, format_for, format_with};
pub use service::RateAggregator;
