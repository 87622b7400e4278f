//! Raw dataset sources.
//!
//! The engine does not care where the CSV text comes from; it only needs
//! something that can turn a dataset name into raw text. [`SourceFetcher`]
//! is that seam, with a filesystem implementation for local data
//! directories and tests, and an HTTP implementation for deployments that
//! serve the CSVs as static files.

mod error;
mod fetch;

pub use error::FetchError;
pub use fetch::{FsFetcher, HttpFetcher, HttpFetcherConfig, SourceFetcher};
