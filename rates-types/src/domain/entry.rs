//! Reshaped per-date output and the batch that collects it.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CurrencyCode, DateKey};

/// Sale and purchase rate of one currency on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePair {
    pub sale: f64,
    pub purchase: f64,
}

/// Rates for one date, serialized as `{"DD.MM.YYYY": {"EUR": {...}, ...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedEntry {
    date: DateKey,
    rates: BTreeMap<CurrencyCode, RatePair>,
}

impl FormattedEntry {
    pub fn new(date: DateKey) -> Self {
        Self {
            date,
            rates: BTreeMap::new(),
        }
    }

    pub fn with_rate(mut self, currency: CurrencyCode, pair: RatePair) -> Self {
        self.rates.insert(currency, pair);
        self
    }

    pub fn date(&self) -> DateKey {
        self.date
    }

    pub fn rate(&self, currency: CurrencyCode) -> Option<&RatePair> {
        self.rates.get(&currency)
    }

    pub fn rates(&self) -> &BTreeMap<CurrencyCode, RatePair> {
        &self.rates
    }
}

impl Serialize for FormattedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}

/// Ordered per-date results of one batch, most recent date first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchResult(Vec<FormattedEntry>);

impl BatchResult {
    pub fn new(entries: Vec<FormattedEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[FormattedEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
