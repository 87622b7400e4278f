//! Domain types for the capacity-planning datasets.
//!
//! This module contains the typed row records the rest of the crate works
//! with. Raw CSV fields are converted into these types exactly once, at
//! load time; code that receives them never re-parses strings.

mod dataset;
mod date;
mod route;
mod rows;
mod value;

pub use dataset::DatasetKind;
pub use date::{EffectiveDate, InvalidDate};
pub use route::{InvalidRoute, RouteId};
pub use rows::{
    BusinessPlanRow, Dated, DemandSignalRow, ExecutionRow, FlightInfoRow, ForecastRow, RouteKeyed,
    SummaryRow, WeeklyPlanRow,
};
pub use value::{MissingField, display_or_na, or_zero, require};
