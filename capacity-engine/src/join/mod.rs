//! Key index / join engine.
//!
//! Point queries over the loaded bundle. Matching is exact string
//! equality on the `(route, effective date)` key; flight metadata joins
//! on route alone. A dataset with no matching row yields an explicit
//! `None`, never a default row. When a dataset violates key uniqueness,
//! the first occurrence in source order wins; this is deterministic but
//! deliberately not validated.

use crate::domain::{
    BusinessPlanRow, Dated, EffectiveDate, ExecutionRow, FlightInfoRow, ForecastRow, RouteId,
    RouteKeyed, SummaryRow, WeeklyPlanRow,
};
use crate::registry::DatasetBundle;

/// The per-dataset rows matching one `(route, date)` selection.
///
/// Every field is independently optional; callers handle absence
/// per-field.
#[derive(Debug, Clone)]
pub struct RouteDateView<'a> {
    pub forecast: Option<&'a ForecastRow>,
    pub business_plan: Option<&'a BusinessPlanRow>,
    pub weekly_plan: Option<&'a WeeklyPlanRow>,
    pub execution: Option<&'a ExecutionRow>,
    pub summary: Option<&'a SummaryRow>,
    pub flight_info: Option<&'a FlightInfoRow>,
}

/// First row whose route and effective date both match.
fn first_match<'a, R: Dated>(
    rows: &'a [R],
    route: &RouteId,
    date: &EffectiveDate,
) -> Option<&'a R> {
    rows.iter()
        .find(|row| row.route() == route && row.effective_date() == date)
}

/// Look up the active selection across every dataset.
///
/// Flight metadata has no date axis, so it matches on route only and the
/// same row answers every date query for that route.
pub fn find_by_route_and_date<'a>(
    bundle: &'a DatasetBundle,
    route: &RouteId,
    date: &EffectiveDate,
) -> RouteDateView<'a> {
    RouteDateView {
        forecast: first_match(&bundle.forecast, route, date),
        business_plan: first_match(&bundle.business_plan, route, date),
        weekly_plan: first_match(&bundle.weekly_plan, route, date),
        execution: first_match(&bundle.execution, route, date),
        summary: first_match(&bundle.summary, route, date),
        flight_info: bundle
            .flight_capacity
            .iter()
            .find(|row| row.route() == route),
    }
}

/// All rows for a route, preserving source order.
///
/// The source files are pre-sorted chronologically; nothing re-sorts
/// here.
pub fn rows_for_route<'a, R: RouteKeyed>(rows: &'a [R], route: &RouteId) -> Vec<&'a R> {
    rows.iter().filter(|row| row.route() == route).collect()
}

/// The summary slice for a route: the authoritative input for
/// cross-page aggregates.
pub fn route_summary<'a>(bundle: &'a DatasetBundle, route: &RouteId) -> Vec<&'a SummaryRow> {
    rows_for_route(&bundle.summary, route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetKind;
    use crate::registry;
    use crate::sources::{FetchError, SourceFetcher};

    struct OneDataset {
        dataset: DatasetKind,
        text: &'static str,
    }

    impl SourceFetcher for OneDataset {
        async fn fetch(&self, dataset: DatasetKind) -> Result<String, FetchError> {
            if dataset == self.dataset {
                Ok(self.text.to_string())
            } else {
                Err(FetchError::Io {
                    path: dataset.file_name().into(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "absent"),
                })
            }
        }
    }

    async fn bundle_with(dataset: DatasetKind, text: &'static str) -> DatasetBundle {
        registry::load_all(&OneDataset { dataset, text }).await
    }

    fn key(route: &str, date: &str) -> (RouteId, EffectiveDate) {
        (
            RouteId::new(route).unwrap(),
            EffectiveDate::new(date).unwrap(),
        )
    }

    #[tokio::test]
    async fn no_match_is_absent_not_default() {
        let bundle = bundle_with(
            DatasetKind::Forecast,
            "route,date,forecasted_demand\nDEL-FRA,2026-01-01,500\n",
        )
        .await;

        let (route, date) = key("DEL-FRA", "2026-02-15");
        let view = find_by_route_and_date(&bundle, &route, &date);
        assert!(view.forecast.is_none());
        assert!(view.summary.is_none());
        assert!(view.flight_info.is_none());

        let (other_route, date) = key("BOM-MEM", "2026-01-01");
        let view = find_by_route_and_date(&bundle, &other_route, &date);
        assert!(view.forecast.is_none());
    }

    #[tokio::test]
    async fn both_keys_must_match() {
        let bundle = bundle_with(
            DatasetKind::Forecast,
            "route,date,forecasted_demand\n\
             DEL-FRA,2026-01-01,500\n\
             BOM-MEM,2026-01-02,700\n",
        )
        .await;

        // Right route, wrong date; right date, wrong route
        let (route, date) = key("DEL-FRA", "2026-01-02");
        assert!(find_by_route_and_date(&bundle, &route, &date)
            .forecast
            .is_none());

        let (route, date) = key("DEL-FRA", "2026-01-01");
        let found = find_by_route_and_date(&bundle, &route, &date).forecast;
        assert_eq!(found.unwrap().forecasted_demand, Some(500.0));
    }

    #[tokio::test]
    async fn duplicate_keys_take_the_first_occurrence() {
        let bundle = bundle_with(
            DatasetKind::Forecast,
            "route,date,forecasted_demand\n\
             DEL-FRA,2026-01-01,500\n\
             DEL-FRA,2026-01-01,999\n",
        )
        .await;

        let (route, date) = key("DEL-FRA", "2026-01-01");
        let found = find_by_route_and_date(&bundle, &route, &date).forecast;
        assert_eq!(found.unwrap().forecasted_demand, Some(500.0));
    }

    #[tokio::test]
    async fn flight_info_ignores_the_date() {
        let bundle = bundle_with(
            DatasetKind::FlightCapacity,
            "route,flight_id,max_capacity\nDEL-FRA,FX-201,2394\n",
        )
        .await;

        let route = RouteId::new("DEL-FRA").unwrap();
        for date in ["2026-01-01", "2026-06-30", "definitely-not-a-date"] {
            let date = EffectiveDate::new(date).unwrap();
            let view = find_by_route_and_date(&bundle, &route, &date);
            assert_eq!(view.flight_info.unwrap().flight_id.as_deref(), Some("FX-201"));
        }
    }

    #[tokio::test]
    async fn route_slice_preserves_source_order() {
        let bundle = bundle_with(
            DatasetKind::Summary,
            "route,date,load_factor,actual_net_weight\n\
             DEL-FRA,2026-01-03,30,800\n\
             BOM-MEM,2026-01-01,20,500\n\
             DEL-FRA,2026-01-01,31,810\n\
             DEL-FRA,2026-01-02,32,820\n",
        )
        .await;

        let route = RouteId::new("DEL-FRA").unwrap();
        let slice = route_summary(&bundle, &route);
        let dates: Vec<_> = slice.iter().map(|r| r.effective_date.as_str()).collect();
        // Source order, not date order: the engine trusts pre-sorted files
        assert_eq!(dates, ["2026-01-03", "2026-01-01", "2026-01-02"]);
    }
}
