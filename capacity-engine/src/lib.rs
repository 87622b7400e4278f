//! Data engine for a capacity-planning dashboard.
//!
//! Loads a fixed set of pre-computed CSV datasets describing shipping
//! routes (forecasts, plans, commitments, execution actuals), joins them
//! by `(route, date)`, and derives the aggregate metrics the dashboard
//! renders. The rendering layer is an external consumer of this crate;
//! everything here is load-once, read-only, in-memory data.

pub mod domain;
pub mod join;
pub mod metrics;
pub mod registry;
pub mod selection;
pub mod sources;
pub mod tabular;
