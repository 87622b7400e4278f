//! Route identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route: {reason}")]
pub struct InvalidRoute {
    reason: &'static str,
}

/// An origin-destination lane identifier, e.g. `"DEL-FRA"`.
///
/// Route identifiers come from the source CSVs verbatim and are compared
/// by exact string equality everywhere. The only guarantee this type adds
/// is non-emptiness; no format is enforced beyond that, because the
/// datasets themselves are the contract.
///
/// # Examples
///
/// ```
/// use capacity_engine::domain::RouteId;
///
/// let route = RouteId::new("DEL-FRA").unwrap();
/// assert_eq!(route.as_str(), "DEL-FRA");
///
/// assert!(RouteId::new("").is_err());
/// assert!(RouteId::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Construct a route identifier from a raw field value.
    ///
    /// Rejects empty and whitespace-only input; anything else is kept
    /// exactly as-is.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidRoute> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidRoute {
                reason: "must not be empty",
            });
        }
        Ok(RouteId(s))
    }

    /// Returns the route identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
