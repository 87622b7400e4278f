//! Selection state.
//!
//! The dashboard's active `(route, date)` pair. The two are dependent:
//! dates only make sense within a route, so changing the route re-resolves
//! the date to the earliest one valid for the new route. The selection is
//! an immutable value passed down to consumers, not shared mutable state;
//! every change produces a new value.

use serde::Serialize;

use crate::domain::{EffectiveDate, RouteId};
use crate::registry::DatasetBundle;

/// The currently chosen route and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    route: RouteId,
    date: EffectiveDate,
}

impl Selection {
    /// The default selection: the first observed route with its earliest
    /// date. `None` when the forecast dataset loaded empty.
    pub fn initial(bundle: &DatasetBundle) -> Option<Selection> {
        let route = routes(bundle).into_iter().next()?;
        let date = dates_for_route(bundle, &route).into_iter().next()?;
        Some(Selection { route, date })
    }

    pub fn route(&self) -> &RouteId {
        &self.route
    }

    pub fn date(&self) -> &EffectiveDate {
        &self.date
    }

    /// Switch route, re-resolving the date to the earliest one valid for
    /// the new route so a stale cross-route date never leaks through.
    /// When the new route has no dates at all the current date is kept;
    /// joins against it will simply find nothing.
    pub fn with_route(&self, bundle: &DatasetBundle, route: RouteId) -> Selection {
        let date = dates_for_route(bundle, &route)
            .into_iter()
            .next()
            .unwrap_or_else(|| self.date.clone());
        Selection { route, date }
    }

    /// Switch date within the current route.
    pub fn with_date(&self, date: EffectiveDate) -> Selection {
        Selection {
            route: self.route.clone(),
            date,
        }
    }
}

/// Distinct routes observed in the forecast dataset, in order of first
/// appearance.
pub fn routes(bundle: &DatasetBundle) -> Vec<RouteId> {
    let mut seen = Vec::new();
    for row in &bundle.forecast {
        if !seen.contains(&row.route) {
            seen.push(row.route.clone());
        }
    }
    seen
}

/// Distinct effective dates for a route in the forecast dataset, sorted
/// ascending.
pub fn dates_for_route(bundle: &DatasetBundle, route: &RouteId) -> Vec<EffectiveDate> {
    let mut dates: Vec<EffectiveDate> = bundle
        .forecast
        .iter()
        .filter(|row| &row.route == route)
        .map(|row| row.effective_date.clone())
        .collect();
    dates.sort();
    dates.dedup();
    dates
}
