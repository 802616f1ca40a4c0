//! Raw per-date rate documents as returned by the rates API.

use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// The JSON document returned for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRateDocument {
    /// Date in `DD.MM.YYYY` form, kept verbatim.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency_lit: Option<String>,
    pub exchange_rate: Vec<RawRate>,
}

/// One currency entry in a [`RawRateDocument`].
///
/// Every field is optional: the summary entry carries no `currency`, and
/// many currencies only have National Bank rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_rate: Option<f64>,
    #[serde(default, rename = "saleRateNB", skip_serializing_if = "Option::is_none")]
    pub sale_rate_nb: Option<f64>,
    #[serde(default, rename = "purchaseRateNB", skip_serializing_if = "Option::is_none")]
    pub purchase_rate_nb: Option<f64>,
}

impl RawRateDocument {
    /// Finds the entry whose `currency` field matches `code`.
    pub fn rate_for(&self, code: CurrencyCode) -> Option<&RawRate> {
        self.exchange_rate.iter().find(|rate| {
            rate.currency
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(code.as_str()))
        })
    }
}
