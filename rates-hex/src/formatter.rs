//! Reshapes raw rate documents into formatted entries.
//!
//! Currencies are located by their `currency` field, never by position.

use rates_types::{CurrencyCode, DateKey, FormattedEntry, RatePair, RawRateDocument, ShapeError};

/// Formats the default EUR and USD selection.
pub fn format(doc: &RawRateDocument) -> Result<FormattedEntry, ShapeError> {
    format_with(doc, &CurrencyCode::DEFAULT_SELECTION)
}

/// Formats the given currencies; every one of them must be present.
pub fn format_with(
    doc: &RawRateDocument,
    currencies: &[CurrencyCode],
) -> Result<FormattedEntry, ShapeError> {
    let date: DateKey = doc.date.parse()?;
    collect_rates(date, doc, currencies)
}

/// Formats a document fetched for `requested`, rejecting one dated otherwise.
pub fn format_for(
    requested: DateKey,
    doc: &RawRateDocument,
    currencies: &[CurrencyCode],
) -> Result<FormattedEntry, ShapeError> {
    let returned: DateKey = doc.date.parse()?;
    if returned != requested {
        return Err(ShapeError::DateMismatch {
            requested,
            returned: doc.date.clone(),
        });
    }
    collect_rates(requested, doc, currencies)
}

fn collect_rates(
    date: DateKey,
    doc: &RawRateDocument,
    currencies: &[CurrencyCode],
) -> Result<FormattedEntry, ShapeError> {
    currencies.iter().try_fold(FormattedEntry::new(date), |entry, &currency| {
        let rate = doc
            .rate_for(currency)
            .ok_or_else(|| ShapeError::MissingCurrency {
                currency,
                date: doc.date.clone(),
            })?;
        let sale = rate.sale_rate.ok_or(ShapeError::MissingRate {
            currency,
            field: "saleRate",
        })?;
        let purchase = rate.purchase_rate.ok_or(ShapeError::MissingRate {
            currency,
            field: "purchaseRate",
        })?;
        Ok(entry.with_rate(currency, RatePair { sale, purchase }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_types::RawRate;

    fn doc(rates: Vec<RawRate>) -> RawRateDocument {
        RawRateDocument {
            date: "10.03.2024".to_string(),
            bank: Some("PB".to_string()),
            base_currency: Some(980),
            base_currency_lit: Some("UAH".to_string()),
            exchange_rate: rates,
        }
    }

    fn commercial(currency: CurrencyCode, sale: f64, purchase: f64) -> RawRate {
        RawRate {
            base_currency: Some("UAH".to_string()),
            currency: Some(currency.to_string()),
            sale_rate: Some(sale),
            purchase_rate: Some(purchase),
            ..RawRate::default()
        }
    }

    fn eur() -> RawRate {
        commercial(CurrencyCode::EUR, 43.0, 42.5)
    }

    fn usd() -> RawRate {
        commercial(CurrencyCode::USD, 39.8, 39.3)
    }

    #[test]
    fn test_format_extracts_eur_and_usd() {
        let entry = format(&doc(vec![eur(), usd()])).unwrap();
        assert_eq!(entry.date().to_string(), "10.03.2024");
        assert_eq!(
            entry.rate(CurrencyCode::EUR),
            Some(&RatePair {
                sale: 43.0,
                purchase: 42.5
            })
        );
        assert_eq!(
            entry.rate(CurrencyCode::USD),
            Some(&RatePair {
                sale: 39.8,
                purchase: 39.3
            })
        );
        assert_eq!(entry.rates().len(), 2);
    }

    #[test]
    fn test_format_is_order_independent() {
        let forward = format(&doc(vec![eur(), usd()])).unwrap();
        let reversed = format(&doc(vec![usd(), eur()])).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_format_skips_unrelated_entries() {
        let summary = RawRate {
            base_currency: Some("UAH".to_string()),
            sale_rate_nb: Some(38.4),
            purchase_rate_nb: Some(38.4),
            ..RawRate::default()
        };
        let chf = commercial("CHF".parse().unwrap(), 44.0, 43.0);
        let entry = format(&doc(vec![summary, chf, usd(), eur()])).unwrap();
        assert_eq!(entry.rates().len(), 2);
        assert_eq!(entry.rate(CurrencyCode::USD).unwrap().sale, 39.8);
    }

    #[test]
    fn test_format_missing_usd() {
        let result = format(&doc(vec![eur()]));
        assert!(matches!(
            result,
            Err(ShapeError::MissingCurrency { currency, .. }) if currency == CurrencyCode::USD
        ));
    }

    #[test]
    fn test_format_missing_commercial_rate() {
        let mut usd_nb_only = usd();
        usd_nb_only.purchase_rate = None;
        usd_nb_only.purchase_rate_nb = Some(38.4);

        let result = format(&doc(vec![eur(), usd_nb_only]));
        assert!(matches!(
            result,
            Err(ShapeError::MissingRate {
                field: "purchaseRate",
                ..
            })
        ));
    }

    #[test]
    fn test_format_invalid_date() {
        let mut bad = doc(vec![eur(), usd()]);
        bad.date = "2024-03-10".to_string();
        assert!(matches!(format(&bad), Err(ShapeError::InvalidDate(_))));
    }

    #[test]
    fn test_format_for_matching_date() {
        let requested: DateKey = "10.03.2024".parse().unwrap();
        let selection = CurrencyCode::DEFAULT_SELECTION;
        let entry = format_for(requested, &doc(vec![eur(), usd()]), &selection).unwrap();
        assert_eq!(entry.date(), requested);
        assert_eq!(entry.rates().len(), 2);
    }

    #[test]
    fn test_format_for_rejects_other_date() {
        let requested: DateKey = "09.03.2024".parse().unwrap();
        let selection = CurrencyCode::DEFAULT_SELECTION;
        let result = format_for(requested, &doc(vec![eur(), usd()]), &selection);

        match result {
            Err(ShapeError::DateMismatch {
                requested: key,
                returned,
            }) => {
                assert_eq!(key, requested);
                assert_eq!(returned, "10.03.2024");
            }
            other => panic!("expected date mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_format_with_custom_selection() {
        let pln: CurrencyCode = "PLN".parse().unwrap();
        let rates = vec![eur(), usd(), commercial(pln, 10.1, 9.6)];

        let entry = format_with(&doc(rates), &[pln]).unwrap();
        assert_eq!(entry.rates().len(), 1);
        assert_eq!(entry.rate(pln).unwrap().purchase, 9.6);
    }
}
