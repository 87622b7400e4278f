//! Dataset registry.
//!
//! Loads all seven datasets concurrently, converts them to typed rows
//! once, and hands back an immutable [`DatasetBundle`]. A source that
//! fails to fetch or parse degrades to an empty dataset for the session;
//! partial availability is the designed degradation mode, so nothing here
//! is fatal and nothing is retried.

mod convert;

use futures::future::join_all;
use tracing::warn;

use crate::domain::{
    BusinessPlanRow, DatasetKind, DemandSignalRow, ExecutionRow, FlightInfoRow, ForecastRow,
    SummaryRow, WeeklyPlanRow,
};
use crate::sources::SourceFetcher;
use crate::tabular::{self, Table};

/// All loaded datasets, read-only for the lifetime of the session.
#[derive(Debug, Clone, Default)]
pub struct DatasetBundle {
    pub demand_signals: Vec<DemandSignalRow>,
    pub forecast: Vec<ForecastRow>,
    pub flight_capacity: Vec<FlightInfoRow>,
    pub business_plan: Vec<BusinessPlanRow>,
    pub weekly_plan: Vec<WeeklyPlanRow>,
    pub execution: Vec<ExecutionRow>,
    pub summary: Vec<SummaryRow>,
}

impl DatasetBundle {
    /// A bundle with every dataset empty.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fetch and parse every dataset concurrently.
///
/// Waits for all sources (success or individual failure) before
/// returning. Source order within each dataset is preserved; the source
/// files are pre-sorted chronologically and nothing here re-sorts them.
pub async fn load_all<F: SourceFetcher>(fetcher: &F) -> DatasetBundle {
    let fetches: Vec<_> = DatasetKind::ALL
        .iter()
        .map(|&dataset| async move { (dataset, fetch_table(fetcher, dataset).await) })
        .collect();

    let mut bundle = DatasetBundle::empty();
    for (dataset, table) in join_all(fetches).await {
        match dataset {
            DatasetKind::DemandSignals => {
                bundle.demand_signals = convert::demand_signals(&table);
            }
            DatasetKind::Forecast => bundle.forecast = convert::forecast(&table),
            DatasetKind::FlightCapacity => {
                bundle.flight_capacity = convert::flight_capacity(&table);
            }
            DatasetKind::BusinessPlan => bundle.business_plan = convert::business_plan(&table),
            DatasetKind::WeeklyPlan => bundle.weekly_plan = convert::weekly_plan(&table),
            DatasetKind::Execution => bundle.execution = convert::execution(&table),
            DatasetKind::Summary => bundle.summary = convert::summary(&table),
        }
    }
    bundle
}

/// Fetch one dataset and parse it, degrading any failure to an empty
/// table.
async fn fetch_table<F: SourceFetcher>(fetcher: &F, dataset: DatasetKind) -> Table {
    let text = match fetcher.fetch(dataset).await {
        Ok(text) => text,
        Err(error) => {
            warn!(
                dataset = %dataset,
                error = %error,
                "fetch failed, dataset loads empty"
            );
            return Table::empty();
        }
    };

    match tabular::parse(&text) {
        Ok(table) => table,
        Err(error) => {
            warn!(
                dataset = %dataset,
                error = %error,
                "parse failed, dataset loads empty"
            );
            Table::empty()
        }
    }
}
