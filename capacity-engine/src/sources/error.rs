//! Fetch error types.

use std::path::PathBuf;

use crate::domain::DatasetKind;

/// Errors from fetching a named dataset source.
///
/// None of these are fatal to the engine: the registry degrades a failed
/// source to an empty dataset and carries on.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network error, timeout, bad URL).
    #[error("fetching {dataset}: {source}")]
    Http {
        dataset: DatasetKind,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("fetching {dataset}: HTTP status {status}")]
    Status { dataset: DatasetKind, status: u16 },

    /// The HTTP client itself could not be built.
    #[error("building HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// A file-backed source could not be read.
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Status {
            dataset: DatasetKind::Forecast,
            status: 404,
        };
        assert_eq!(err.to_string(), "fetching forecast: HTTP status 404");

        let err = FetchError::Io {
            path: PathBuf::from("/data/execution_actuals.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "reading /data/execution_actuals.csv: no such file"
        );
    }
}
