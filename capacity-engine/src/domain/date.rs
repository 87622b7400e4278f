//! Effective date key.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Error returned when constructing an invalid effective date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid effective date: {reason}")]
pub struct InvalidDate {
    reason: &'static str,
}

/// The date key used to align rows across datasets.
///
/// Source rows carry either a `date` or a `time_period` column; ingestion
/// normalizes whichever is present into one of these, so downstream code
/// never repeats the fallback chain. The value is kept as the exact source
/// string: join lookups compare by string equality with no format
/// normalization, and ordering is lexicographic (which is chronological for
/// the ISO dates the datasets use).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EffectiveDate(String);

impl EffectiveDate {
    /// Construct an effective date from a raw field value.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidDate> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidDate {
                reason: "must not be empty",
            });
        }
        Ok(EffectiveDate(s))
    }

    /// Returns the date key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Best-effort calendar interpretation of the key.
    ///
    /// `None` when the key isn't an ISO `YYYY-MM-DD` date. Join and sort
    /// logic never depends on this; it exists for consumers that want to
    /// bucket by calendar date.
    pub fn as_calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Debug for EffectiveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EffectiveDate({})", self.0)
    }
}

impl fmt::Display for EffectiveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
