//! Strategy comparison: forecast-only baseline vs the committed strategy.

use serde::Serialize;

use crate::domain::{SummaryRow, or_zero};

use super::{mean, ratio_pct};

/// Assumed cost exposure when capacity is committed blindly at forecast:
/// fixed costs land on unused capacity.
pub const FORECAST_ONLY_COST_EXPOSURE: f64 = 75.0;

/// Assumed cost exposure under managed commitment.
pub const COMMITTED_COST_EXPOSURE: f64 = 65.0;

/// Aggregate metrics for one capacity strategy over a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyMetrics {
    /// Mean utilization percentage.
    pub average_utilization: f64,
    /// Mean unused capacity, in the same unit as the weights.
    pub average_void: f64,
    /// `sum(actual) / sum(capacity baseline) * 100`.
    pub reliability: f64,
    /// Fixed assumed constant; not derived from the window.
    pub cost_exposure: f64,
}

impl StrategyMetrics {
    fn zeroed(cost_exposure: f64) -> Self {
        StrategyMetrics {
            average_utilization: 0.0,
            average_void: 0.0,
            reliability: 0.0,
            cost_exposure,
        }
    }
}

/// Counterfactual baseline: capacity assumed equal to the forecast.
///
/// Per row, utilization is `actual / forecast * 100` and void is
/// `forecast - actual`; both are averaged across the window. Reliability
/// is `sum(actual) / sum(forecast) * 100`.
pub fn forecast_only_baseline(window: &[&SummaryRow]) -> StrategyMetrics {
    if window.is_empty() {
        return StrategyMetrics::zeroed(FORECAST_ONLY_COST_EXPOSURE);
    }

    let per_row_utilization = window.iter().map(|row| {
        let forecast = or_zero(row.forecasted_demand);
        let actual = or_zero(row.actual_net_weight);
        Some(ratio_pct(actual, forecast))
    });
    let per_row_void = window.iter().map(|row| {
        Some(or_zero(row.forecasted_demand) - or_zero(row.actual_net_weight))
    });

    let total_actual: f64 = window.iter().map(|row| or_zero(row.actual_net_weight)).sum();
    let total_forecast: f64 = window
        .iter()
        .map(|row| or_zero(row.forecasted_demand))
        .sum();

    StrategyMetrics {
        average_utilization: mean(per_row_utilization),
        average_void: mean(per_row_void),
        reliability: ratio_pct(total_actual, total_forecast),
        cost_exposure: FORECAST_ONLY_COST_EXPOSURE,
    }
}

/// The committed-capacity strategy as actually executed.
///
/// Utilization and void come straight from the source `load_factor` and
/// `void_capacity` columns; reliability is `sum(actual) / sum(committed)
/// * 100`.
pub fn committed_strategy(window: &[&SummaryRow]) -> StrategyMetrics {
    if window.is_empty() {
        return StrategyMetrics::zeroed(COMMITTED_COST_EXPOSURE);
    }

    let total_actual: f64 = window.iter().map(|row| or_zero(row.actual_net_weight)).sum();
    let total_committed: f64 = window
        .iter()
        .map(|row| or_zero(row.committed_capacity))
        .sum();

    StrategyMetrics {
        average_utilization: mean(window.iter().map(|row| row.load_factor)),
        average_void: mean(window.iter().map(|row| row.void_capacity)),
        reliability: ratio_pct(total_actual, total_committed),
        cost_exposure: COMMITTED_COST_EXPOSURE,
    }
}

/// Whether a bigger value of a metric is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Signed improvement of `strategy` over `baseline`.
///
/// For lower-is-better metrics (void capacity, cost exposure) the sign
/// is inverted, so a positive result always reads as an improvement.
pub fn improvement(baseline: f64, strategy: f64, polarity: Polarity) -> f64 {
    match polarity {
        Polarity::HigherIsBetter => strategy - baseline,
        Polarity::LowerIsBetter => baseline - strategy,
    }
}

/// Improvement deltas for each paired metric, sign-corrected so positive
/// means the strategy did better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyComparison {
    pub utilization: f64,
    pub void: f64,
    pub reliability: f64,
    pub cost_exposure: f64,
}

pub fn compare_strategies(
    baseline: &StrategyMetrics,
    strategy: &StrategyMetrics,
) -> StrategyComparison {
    StrategyComparison {
        utilization: improvement(
            baseline.average_utilization,
            strategy.average_utilization,
            Polarity::HigherIsBetter,
        ),
        void: improvement(
            baseline.average_void,
            strategy.average_void,
            Polarity::LowerIsBetter,
        ),
        reliability: improvement(
            baseline.reliability,
            strategy.reliability,
            Polarity::HigherIsBetter,
        ),
        cost_exposure: improvement(
            baseline.cost_exposure,
            strategy.cost_exposure,
            Polarity::LowerIsBetter,
        ),
    }
}

/// Whether a weekly commitment sits under or above the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommitmentStance {
    /// Committed below forecast: capacity is being held back.
    UnderCommitment,
    /// Committed at or above forecast.
    AggressiveCommitment,
}

/// The commitment decision for one `(route, date)`, relative to forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitmentGap {
    pub stance: CommitmentStance,
    /// Absolute distance between commitment and forecast, in tons.
    pub tons: f64,
}

/// Classify a committed capacity against the matching forecast. Absent
/// values read as zero, per the arithmetic policy.
pub fn commitment_gap(committed: Option<f64>, forecasted: Option<f64>) -> CommitmentGap {
    let committed = or_zero(committed);
    let forecasted = or_zero(forecasted);
    if committed < forecasted {
        CommitmentGap {
            stance: CommitmentStance::UnderCommitment,
            tons: forecasted - committed,
        }
    } else {
        CommitmentGap {
            stance: CommitmentStance::AggressiveCommitment,
            tons: committed - forecasted,
        }
    }
}
