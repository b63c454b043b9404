// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the loader and renderers.

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("row {row}: unrecognised date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: value {value} is not a non-negative finite number")]
    InvalidValue { row: usize, value: f64 },

    #[error("dataset contains no data points")]
    EmptyDataset,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
