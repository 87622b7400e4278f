//! Observed-outcome aggregates.

use crate::domain::{ExecutionRow, SummaryRow, or_zero};

use super::{mean, ratio_pct};

/// Datasets that record observed outcomes. Execution actuals and the
/// pre-joined summary both carry these columns, so the averages below
/// work over either.
pub trait Outcome {
    fn load_factor(&self) -> Option<f64>;
    fn void_capacity(&self) -> Option<f64>;
    fn actual_net_weight(&self) -> Option<f64>;
}

impl Outcome for ExecutionRow {
    fn load_factor(&self) -> Option<f64> {
        self.load_factor
    }
    fn void_capacity(&self) -> Option<f64> {
        self.void_capacity
    }
    fn actual_net_weight(&self) -> Option<f64> {
        self.actual_net_weight
    }
}

impl Outcome for SummaryRow {
    fn load_factor(&self) -> Option<f64> {
        self.load_factor
    }
    fn void_capacity(&self) -> Option<f64> {
        self.void_capacity
    }
    fn actual_net_weight(&self) -> Option<f64> {
        self.actual_net_weight
    }
}

/// Mean `load_factor` over the window; 0 on an empty window.
pub fn average_load_factor<R: Outcome>(window: &[&R]) -> f64 {
    mean(window.iter().map(|row| row.load_factor()))
}

/// Mean `void_capacity` over the window; 0 on an empty window.
pub fn average_void_capacity<R: Outcome>(window: &[&R]) -> f64 {
    mean(window.iter().map(|row| row.void_capacity()))
}

/// Service reliability over the window:
/// `sum(actual_net_weight) / sum(committed_capacity) * 100`.
///
/// Committed capacity only exists on the summary dataset, which is the
/// authoritative input for this ratio. A zero committed sum yields 0.
pub fn service_reliability(window: &[&SummaryRow]) -> f64 {
    let actual: f64 = window
        .iter()
        .map(|row| or_zero(row.actual_net_weight))
        .sum();
    let committed: f64 = window
        .iter()
        .map(|row| or_zero(row.committed_capacity))
        .sum();
    ratio_pct(actual, committed)
}
