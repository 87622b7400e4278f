//! Dataset names and their source files.

use std::fmt;

use serde::Serialize;

/// The fixed set of datasets the dashboard consumes.
///
/// The file names are a contract with the deployment that serves them;
/// they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DatasetKind {
    DemandSignals,
    Forecast,
    FlightCapacity,
    BusinessPlan,
    WeeklyPlan,
    Execution,
    Summary,
}

impl DatasetKind {
    /// All datasets, in the order they are fetched.
    pub const ALL: [DatasetKind; 7] = [
        DatasetKind::DemandSignals,
        DatasetKind::Forecast,
        DatasetKind::FlightCapacity,
        DatasetKind::BusinessPlan,
        DatasetKind::WeeklyPlan,
        DatasetKind::Execution,
        DatasetKind::Summary,
    ];

    /// The file name this dataset is served under.
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::DemandSignals => "customer_sku_demand_signals.csv",
            DatasetKind::Forecast => "forecasted_demand_output.csv",
            DatasetKind::FlightCapacity => "flight_capacity_master.csv",
            DatasetKind::BusinessPlan => "business_plan_capacity.csv",
            DatasetKind::WeeklyPlan => "weekly_plan_capacity.csv",
            DatasetKind::Execution => "execution_actuals.csv",
            DatasetKind::Summary => "planning_vs_execution_summary.csv",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetKind::DemandSignals => "demand signals",
            DatasetKind::Forecast => "forecast",
            DatasetKind::FlightCapacity => "flight capacity",
            DatasetKind::BusinessPlan => "business plan",
            DatasetKind::WeeklyPlan => "weekly plan",
            DatasetKind::Execution => "execution",
            DatasetKind::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_the_deployment_contract() {
        assert_eq!(
            DatasetKind::DemandSignals.file_name(),
            "customer_sku_demand_signals.csv"
        );
        assert_eq!(
            DatasetKind::Forecast.file_name(),
            "forecasted_demand_output.csv"
        );
        assert_eq!(
            DatasetKind::FlightCapacity.file_name(),
            "flight_capacity_master.csv"
        );
        assert_eq!(
            DatasetKind::BusinessPlan.file_name(),
            "business_plan_capacity.csv"
        );
        assert_eq!(
            DatasetKind::WeeklyPlan.file_name(),
            "weekly_plan_capacity.csv"
        );
        assert_eq!(DatasetKind::Execution.file_name(), "execution_actuals.csv");
        assert_eq!(
            DatasetKind::Summary.file_name(),
            "planning_vs_execution_summary.csv"
        );
    }

    #[test]
    fn all_covers_every_dataset() {
        assert_eq!(DatasetKind::ALL.len(), 7);
        let mut file_names: Vec<_> = DatasetKind::ALL.iter().map(|k| k.file_name()).collect();
        file_names.sort();
        file_names.dedup();
        assert_eq!(file_names.len(), 7);
    }
}
