//! Missing-value policy helpers.
//!
//! Numeric CSV fields frequently arrive blank or unparseable, and the two
//! places that read them want different things: arithmetic treats an absent
//! value as zero, while display must say "not available" rather than show a
//! fabricated zero. These are deliberately two separate helpers so neither
//! policy leaks into the other.

use super::DatasetKind;

/// Error for a queried field that is absent on a row that was found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{dataset}: {field} is not available")]
pub struct MissingField {
    /// Dataset the row came from.
    pub dataset: DatasetKind,
    /// Column that was absent or unparseable.
    pub field: &'static str,
}

/// Arithmetic read: absent or unparseable values count as zero.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Strict read: absent values are an explicit [`MissingField`] error.
pub fn require(
    value: Option<f64>,
    dataset: DatasetKind,
    field: &'static str,
) -> Result<f64, MissingField> {
    value.ok_or(MissingField { dataset, field })
}

/// Display read: absent values render as `"N/A"`, present values with one
/// decimal place (the precision the dashboard shows everywhere).
pub fn display_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "N/A".to_string(),
    }
}
