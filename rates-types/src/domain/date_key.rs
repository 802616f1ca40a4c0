//! Calendar dates in the `DD.MM.YYYY` wire format.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ShapeError, ValidationError};

/// Largest day count a single batch may request.
pub const MAX_DAYS: u32 = 10;

const WIRE_FORMAT: &str = "%d.%m.%Y";

/// A date used both as the API query parameter and as the output grouping key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the keys `reference - 0d, -1d, ..., -(days-1)d`, most recent first.
    pub fn window(reference: NaiveDate, days: u32) -> Result<Vec<DateKey>, ValidationError> {
        (0..days)
            .map(|offset| {
                reference
                    .checked_sub_days(Days::new(u64::from(offset)))
                    .map(DateKey)
                    .ok_or(ValidationError::DateOutOfRange { offset })
            })
            .collect()
    }

    /// Rejects day counts above [`MAX_DAYS`].
    pub fn check_days(days: u32) -> Result<u32, ValidationError> {
        if days > MAX_DAYS {
            return Err(ValidationError::TooManyDays {
                requested: days,
                max: MAX_DAYS,
            });
        }
        Ok(days)
    }
}

impl FromStr for DateKey {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), WIRE_FORMAT)
            .map(DateKey)
            .map_err(|_| ShapeError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl fmt::Debug for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateKey({})", self)
    }
}
