//! Typed per-dataset row records.
//!
//! One struct per dataset, each carrying its keys as validated types and
//! its numeric columns as `Option<f64>` (absent when the source field was
//! missing or unparseable; see [`super::value`] for the read policies).
//! Rows are immutable after load.

use serde::Serialize;

use super::{EffectiveDate, RouteId};

/// Rows keyed by route.
pub trait RouteKeyed {
    fn route(&self) -> &RouteId;
}

/// Rows keyed by route and effective date.
pub trait Dated: RouteKeyed {
    fn effective_date(&self) -> &EffectiveDate;
}

/// One demand signal observation (customer/SKU granularity).
#[derive(Debug, Clone, Serialize)]
pub struct DemandSignalRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub customer_id: Option<String>,
    pub sku: Option<String>,
    pub demand_quantity: Option<f64>,
}

/// One forecast output row.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub base_demand: Option<f64>,
    pub forecasted_demand: Option<f64>,
    /// Confidence in `[0, 1]` as produced upstream; not re-clipped here.
    pub forecast_confidence: Option<f64>,
}

/// Static flight metadata for a route. No date axis: one row per route.
#[derive(Debug, Clone, Serialize)]
pub struct FlightInfoRow {
    pub route: RouteId,
    pub flight_id: Option<String>,
    pub fixed_cost: Option<f64>,
    pub variable_cost_per_unit: Option<f64>,
    pub max_capacity: Option<f64>,
    pub delay_risk_score: Option<f64>,
    pub real_time_update_flag: Option<f64>,
}

/// One business plan row (the static annual plan, never adjusted).
#[derive(Debug, Clone, Serialize)]
pub struct BusinessPlanRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub planned_capacity: Option<f64>,
    pub planned_net_weight: Option<f64>,
}

/// One weekly commitment decision row.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlanRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub committed_capacity: Option<f64>,
    pub max_capacity: Option<f64>,
    /// Labeled category describing how the commitment was set relative to
    /// forecast, carried through verbatim.
    pub utilization_strategy: Option<String>,
}

/// One observed execution outcome row.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub actual_net_weight: Option<f64>,
    pub load_factor: Option<f64>,
    pub void_capacity: Option<f64>,
}

/// One pre-joined planning-vs-execution row.
///
/// This dataset is authoritative for cross-page aggregates; the calculators
/// read it rather than re-joining the underlying datasets.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub route: RouteId,
    pub effective_date: EffectiveDate,
    pub committed_capacity: Option<f64>,
    pub actual_net_weight: Option<f64>,
    pub load_factor: Option<f64>,
    pub void_capacity: Option<f64>,
    pub forecasted_demand: Option<f64>,
}

macro_rules! impl_keys {
    (route_only: $ty:ty) => {
        impl RouteKeyed for $ty {
            fn route(&self) -> &RouteId {
                &self.route
            }
        }
    };
    ($ty:ty) => {
        impl_keys!(route_only: $ty);
        impl Dated for $ty {
            fn effective_date(&self) -> &EffectiveDate {
                &self.effective_date
            }
        }
    };
}

impl_keys!(DemandSignalRow);
impl_keys!(ForecastRow);
impl_keys!(route_only: FlightInfoRow);
impl_keys!(BusinessPlanRow);
impl_keys!(WeeklyPlanRow);
impl_keys!(ExecutionRow);
impl_keys!(SummaryRow);
