//! Source fetcher trait and implementations.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::DatasetKind;

use super::FetchError;

/// Default request timeout for the HTTP fetcher.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can produce the raw CSV text for a named dataset.
///
/// This abstraction keeps the registry independent of where the files
/// live and lets tests substitute in-memory data.
pub trait SourceFetcher {
    /// Fetch the raw text of one dataset.
    fn fetch(
        &self,
        dataset: DatasetKind,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetcher backed by a directory of CSV files.
///
/// Expects each dataset under its contract file name, e.g.
/// `<dir>/forecasted_demand_output.csv`.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    dir: PathBuf,
}

impl FsFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsFetcher { dir: dir.into() }
    }
}

impl SourceFetcher for FsFetcher {
    async fn fetch(&self, dataset: DatasetKind) -> Result<String, FetchError> {
        let path = self.dir.join(dataset.file_name());
        std::fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })
    }
}

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Origin the CSVs are served from, e.g. `https://dash.example.com/data`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpFetcherConfig {
    /// Create a config for the given origin with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpFetcherConfig {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Fetcher for deployments that serve the CSVs as static files over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher.
    pub fn new(config: HttpFetcherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(HttpFetcher {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, dataset: DatasetKind) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, dataset.file_name());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Http { dataset, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                dataset,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Http { dataset, source })
    }
}
