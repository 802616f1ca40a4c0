//! Rate Aggregation Service
//!
//! Fans one fetch per date out over a [`RateSource`], joins them at a single
//! barrier, and reassembles the results in request order.

use chrono::NaiveDate;
use futures::future::try_join_all;
use rates_types::{BatchResult, CurrencyCode, DateKey, FormattedEntry, RateError, RateSource};

use crate::formatter::format_for;

/// Application service for batch rate fetches.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time,
/// and owned for the lifetime of the aggregator so the underlying client is
/// released when the aggregator is dropped.
pub struct RateAggregator<S: RateSource> {
    source: S,
    currencies: Vec<CurrencyCode>,
}

impl<S: RateSource> RateAggregator<S> {
    /// Creates an aggregator reporting EUR and USD.
    pub fn new(source: S) -> Self {
        Self {
            source,
            currencies: CurrencyCode::DEFAULT_SELECTION.to_vec(),
        }
    }

    /// Replaces the reported currencies. An empty list keeps the default.
    pub fn with_currencies(mut self, currencies: impl IntoIterator<Item = CurrencyCode>) -> Self {
        let mut selected: Vec<CurrencyCode> = currencies.into_iter().collect();
        selected.sort();
        selected.dedup();
        if !selected.is_empty() {
            self.currencies = selected;
        }
        self
    }

    /// Returns a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn currencies(&self) -> &[CurrencyCode] {
        &self.currencies
    }

    /// Fetches `days` dates ending at `reference`, rejecting more than
    /// [`rates_types::MAX_DAYS`] before any request is made.
    pub async fn fetch_recent(
        &self,
        reference: NaiveDate,
        days: u32,
    ) -> Result<BatchResult, RateError> {
        let days = DateKey::check_days(days)?;
        self.fetch_batch(reference, days).await
    }

    /// Fetches `days` dates ending at `reference`, most recent first.
    ///
    /// All fetches run concurrently. The first failure fails the batch and
    /// drops the fetches still in flight; no partial result is returned.
    #[tracing::instrument(skip(self), fields(currencies = ?self.currencies))]
    pub async fn fetch_batch(
        &self,
        reference: NaiveDate,
        days: u32,
    ) -> Result<BatchResult, RateError> {
        let keys = DateKey::window(reference, days)?;
        if keys.is_empty() {
            return Ok(BatchResult::default());
        }

        let entries = try_join_all(keys.iter().map(|key| self.fetch_entry(key)))
            .await
            .inspect_err(|e| tracing::warn!("Batch aborted: {}", e))?;

        tracing::info!("Fetched rates for {} dates", entries.len());
        Ok(BatchResult::new(entries))
    }

    async fn fetch_entry(&self, key: &DateKey) -> Result<FormattedEntry, RateError> {
        tracing::debug!(date = %key, "Fetching rates");
        let doc = self.source.fetch_rates(key).await?;
        let entry = format_for(*key, &doc, &self.currencies)?;
        tracing::debug!(date = %key, "Formatted rates");
        Ok(entry)
    }
}
