//! Derived metrics calculators.
//!
//! A family of pure functions that consume a bounded window of a route's
//! rows and produce small chart-ready aggregate records. Every calculator
//! is total: an empty window is a defined zero-valued result, never an
//! error, and a zero denominator normalizes to 0 rather than leaking NaN
//! into the display layer.

mod decision;
mod impact;
mod outcome;
mod strategy;
mod window;

pub use decision::{DecisionLens, decision_lens};
pub use impact::{RouteImpact, route_impact};
pub use outcome::{Outcome, average_load_factor, average_void_capacity, service_reliability};
pub use strategy::{
    COMMITTED_COST_EXPOSURE, CommitmentGap, CommitmentStance, FORECAST_ONLY_COST_EXPOSURE,
    Polarity, StrategyComparison, StrategyMetrics, commitment_gap, committed_strategy,
    compare_strategies, forecast_only_baseline, improvement,
};
pub use window::{WINDOW_CAP, window};

/// Arithmetic mean over best-effort numeric fields; 0 on an empty window.
/// Absent values count as zero, per the arithmetic read policy.
fn mean(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += crate::domain::or_zero(value);
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// `numerator / denominator * 100`, normalized to 0 when the denominator
/// is 0 (the documented fallback, not a silent NaN).
fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}
