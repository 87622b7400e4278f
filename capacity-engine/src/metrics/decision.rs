//! The 4-factor decision lens.
//!
//! Four independently normalized `[0, 1]` factor scores scaled to 0-100
//! for display. This is a deterministic read-through of pre-existing data
//! columns with fixed fallbacks for absent values, not a learned or
//! adaptive model.

use serde::Serialize;

use crate::domain::{FlightInfoRow, ForecastRow};

/// Fallback forecast confidence when the forecast row or field is absent.
const DEFAULT_CONFIDENCE: f64 = 0.75;
/// Fallback fixed cost per flight.
const DEFAULT_FIXED_COST: f64 = 50_000.0;
/// Fallback variable cost per unit of weight.
const DEFAULT_VARIABLE_COST: f64 = 3.0;
/// Fallback maximum capacity.
const DEFAULT_MAX_CAPACITY: f64 = 2_000.0;
/// Fallback delay risk score.
const DEFAULT_DELAY_RISK: f64 = 0.3;
/// Fallback real-time update flag (off).
const DEFAULT_FLEXIBILITY: f64 = 0.0;

/// Factor scores for one `(route, date)` selection, each on a 0-100
/// display scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionLens {
    /// Forecast confidence, read directly.
    pub demand_stability: f64,
    /// Share of cost that is fixed: `fixed / (fixed + variable * max)`.
    pub cost_exposure: f64,
    /// Delay risk score, read directly.
    pub delay_risk: f64,
    /// Real-time update flag, read directly (0 or 100 after scaling).
    pub flexibility: f64,
}

/// Score the four factors for the active selection.
///
/// Either input may be absent (route not in the dataset); every factor
/// falls back to its documented default rather than failing.
pub fn decision_lens(
    forecast: Option<&ForecastRow>,
    flight_info: Option<&FlightInfoRow>,
) -> DecisionLens {
    let confidence = forecast
        .and_then(|row| row.forecast_confidence)
        .unwrap_or(DEFAULT_CONFIDENCE);

    let fixed_cost = flight_info
        .and_then(|row| row.fixed_cost)
        .unwrap_or(DEFAULT_FIXED_COST);
    let variable_cost = flight_info
        .and_then(|row| row.variable_cost_per_unit)
        .unwrap_or(DEFAULT_VARIABLE_COST);
    let max_capacity = flight_info
        .and_then(|row| row.max_capacity)
        .unwrap_or(DEFAULT_MAX_CAPACITY);
    let variable_at_max = variable_cost * max_capacity;
    let cost_exposure = if fixed_cost + variable_at_max == 0.0 {
        0.0
    } else {
        fixed_cost / (fixed_cost + variable_at_max)
    };

    let delay_risk = flight_info
        .and_then(|row| row.delay_risk_score)
        .unwrap_or(DEFAULT_DELAY_RISK);
    let flexibility = flight_info
        .and_then(|row| row.real_time_update_flag)
        .unwrap_or(DEFAULT_FLEXIBILITY);

    DecisionLens {
        demand_stability: confidence * 100.0,
        cost_exposure: cost_exposure * 100.0,
        delay_risk: delay_risk * 100.0,
        flexibility: flexibility * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EffectiveDate, RouteId};

    fn forecast_row(confidence: Option<f64>) -> ForecastRow {
        ForecastRow {
            route: RouteId::new("DEL-FRA").unwrap(),
            effective_date: EffectiveDate::new("2026-01-01").unwrap(),
            base_demand: Some(480.0),
            forecasted_demand: Some(500.0),
            forecast_confidence: confidence,
        }
    }

    fn flight_row() -> FlightInfoRow {
        FlightInfoRow {
            route: RouteId::new("DEL-FRA").unwrap(),
            flight_id: Some("FX-201".to_string()),
            fixed_cost: Some(52_000.0),
            variable_cost_per_unit: Some(4.0),
            max_capacity: Some(2_000.0),
            delay_risk_score: Some(0.22),
            real_time_update_flag: Some(1.0),
        }
    }

    #[test]
    fn scores_from_present_data() {
        let forecast = forecast_row(Some(0.82));
        let flight = flight_row();
        let lens = decision_lens(Some(&forecast), Some(&flight));

        assert_eq!(lens.demand_stability, 82.0);
        // 52000 / (52000 + 4 * 2000) = 52000 / 60000
        assert!((lens.cost_exposure - 86.666_666).abs() < 1e-3);
        assert_eq!(lens.delay_risk, 22.0);
        assert_eq!(lens.flexibility, 100.0);
    }

    #[test]
    fn absent_rows_use_every_default() {
        let lens = decision_lens(None, None);

        assert_eq!(lens.demand_stability, 75.0);
        // 50000 / (50000 + 3 * 2000) = 50000 / 56000
        assert!((lens.cost_exposure - 89.285_714).abs() < 1e-3);
        assert_eq!(lens.delay_risk, 30.0);
        assert_eq!(lens.flexibility, 0.0);
    }

    #[test]
    fn absent_fields_default_independently() {
        let forecast = forecast_row(None);
        let mut flight = flight_row();
        flight.delay_risk_score = None;

        let lens = decision_lens(Some(&forecast), Some(&flight));
        assert_eq!(lens.demand_stability, 75.0);
        assert_eq!(lens.delay_risk, 30.0);
        // Present fields still read through
        assert_eq!(lens.flexibility, 100.0);
    }

    #[test]
    fn present_zero_is_not_replaced_by_a_default() {
        let forecast = forecast_row(Some(0.0));
        let mut flight = flight_row();
        flight.delay_risk_score = Some(0.0);
        flight.real_time_update_flag = Some(0.0);

        let lens = decision_lens(Some(&forecast), Some(&flight));
        assert_eq!(lens.demand_stability, 0.0);
        assert_eq!(lens.delay_risk, 0.0);
        assert_eq!(lens.flexibility, 0.0);
    }
}
