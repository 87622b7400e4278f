//! Raw row to typed row conversion.
//!
//! Runs exactly once per load. Key columns are validated here: a dated
//! row without both a route and an effective date can never be joined, so
//! it is dropped (with a debug log) rather than carried as dead weight.
//! Everything else is best-effort: numbers that fail to parse load as
//! absent, not as errors.

use tracing::debug;

use crate::domain::{
    BusinessPlanRow, DemandSignalRow, EffectiveDate, ExecutionRow, FlightInfoRow, ForecastRow,
    RouteId, SummaryRow, WeeklyPlanRow,
};
use crate::tabular::{Row, Table};

/// Route key, shared by every dataset.
fn route(row: &Row) -> Option<RouteId> {
    RouteId::new(row.text("route")?).ok()
}

/// Canonical date key: the `date` column, falling back to `time_period`.
/// This is the one place the fallback chain lives.
fn effective_date(row: &Row) -> Option<EffectiveDate> {
    let raw = row.text("date").or_else(|| row.text("time_period"))?;
    EffectiveDate::new(raw).ok()
}

/// Both keys, or a debug log and `None`.
fn keys(row: &Row, dataset: &str) -> Option<(RouteId, EffectiveDate)> {
    match (route(row), effective_date(row)) {
        (Some(route), Some(date)) => Some((route, date)),
        _ => {
            debug!(dataset, "dropping row without a (route, date) key");
            None
        }
    }
}

pub(crate) fn demand_signals(table: &Table) -> Vec<DemandSignalRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "demand signals")?;
            Some(DemandSignalRow {
                route,
                effective_date,
                customer_id: row.text("customer_id").map(String::from),
                sku: row.text("sku").map(String::from),
                demand_quantity: row.number("demand_quantity"),
            })
        })
        .collect()
}

pub(crate) fn forecast(table: &Table) -> Vec<ForecastRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "forecast")?;
            Some(ForecastRow {
                route,
                effective_date,
                base_demand: row.number("base_demand"),
                forecasted_demand: row.number("forecasted_demand"),
                forecast_confidence: row.number("forecast_confidence"),
            })
        })
        .collect()
}

pub(crate) fn flight_capacity(table: &Table) -> Vec<FlightInfoRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            // Flight metadata has no date axis; only the route is required
            let route = route(row).or_else(|| {
                debug!(dataset = "flight capacity", "dropping row without a route");
                None
            })?;
            Some(FlightInfoRow {
                route,
                flight_id: row.text("flight_id").map(String::from),
                fixed_cost: row.number("fixed_cost"),
                variable_cost_per_unit: row.number("variable_cost_per_unit"),
                max_capacity: row.number("max_capacity"),
                delay_risk_score: row.number("delay_risk_score"),
                real_time_update_flag: row.number("real_time_update_flag"),
            })
        })
        .collect()
}

pub(crate) fn business_plan(table: &Table) -> Vec<BusinessPlanRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "business plan")?;
            Some(BusinessPlanRow {
                route,
                effective_date,
                planned_capacity: row.number("planned_capacity"),
                planned_net_weight: row.number("planned_net_weight"),
            })
        })
        .collect()
}

pub(crate) fn weekly_plan(table: &Table) -> Vec<WeeklyPlanRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "weekly plan")?;
            Some(WeeklyPlanRow {
                route,
                effective_date,
                committed_capacity: row.number("committed_capacity"),
                max_capacity: row.number("max_capacity"),
                utilization_strategy: row.text("utilization_strategy").map(String::from),
            })
        })
        .collect()
}

pub(crate) fn execution(table: &Table) -> Vec<ExecutionRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "execution")?;
            Some(ExecutionRow {
                route,
                effective_date,
                actual_net_weight: row.number("actual_net_weight"),
                load_factor: row.number("load_factor"),
                void_capacity: row.number("void_capacity"),
            })
        })
        .collect()
}

pub(crate) fn summary(table: &Table) -> Vec<SummaryRow> {
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let (route, effective_date) = keys(row, "summary")?;
            Some(SummaryRow {
                route,
                effective_date,
                committed_capacity: row.number("committed_capacity"),
                actual_net_weight: row.number("actual_net_weight"),
                load_factor: row.number("load_factor"),
                void_capacity: row.number("void_capacity"),
                forecasted_demand: row.number("forecasted_demand"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular;

    #[test]
    fn date_column_wins_over_time_period() {
        let table = tabular::parse(
            "route,date,time_period,forecasted_demand\nDEL-FRA,2026-01-01,2026-W01,500\n",
        )
        .unwrap();
        let rows = forecast(&table);
        assert_eq!(rows[0].effective_date.as_str(), "2026-01-01");
    }

    #[test]
    fn weekly_plan_keeps_strategy_label_verbatim() {
        let table = tabular::parse(
            "route,date,committed_capacity,max_capacity,utilization_strategy\n\
             DEL-FRA,2026-01-01,1000,2394,Under-Commitment\n",
        )
        .unwrap();
        let rows = weekly_plan(&table);
        assert_eq!(
            rows[0].utilization_strategy.as_deref(),
            Some("Under-Commitment")
        );
    }

    #[test]
    fn flight_capacity_needs_only_a_route() {
        let table = tabular::parse(
            "route,flight_id,fixed_cost\nDEL-FRA,FX-201,52000\n,FX-999,10000\n",
        )
        .unwrap();
        let rows = flight_capacity(&table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].route.as_str(), "DEL-FRA");
    }
}
