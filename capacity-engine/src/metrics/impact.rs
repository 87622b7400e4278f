//! Route-level impact roll-up.

use serde::Serialize;

use crate::domain::{SummaryRow, or_zero};

use super::{mean, ratio_pct};

/// Executive-summary aggregates over a route's full summary history.
///
/// Unlike the per-view calculators this does not cap the window: it rolls
/// up every day the summary dataset has for the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteImpact {
    pub total_days: usize,
    pub average_load_factor: f64,
    pub average_void_capacity: f64,
    pub service_reliability: f64,
}

pub fn route_impact(rows: &[&SummaryRow]) -> RouteImpact {
    let total_actual: f64 = rows.iter().map(|row| or_zero(row.actual_net_weight)).sum();
    let total_committed: f64 = rows
        .iter()
        .map(|row| or_zero(row.committed_capacity))
        .sum();

    RouteImpact {
        total_days: rows.len(),
        average_load_factor: mean(rows.iter().map(|row| row.load_factor)),
        average_void_capacity: mean(rows.iter().map(|row| row.void_capacity)),
        service_reliability: ratio_pct(total_actual, total_committed),
    }
}
