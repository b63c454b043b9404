// File: crates/chart-core/src/loader.rs
// Summary: One-shot dataset loading over HTTP or from disk.

use std::path::Path;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::types::DATA_URL;

/// Source document shape; sibling metadata fields are ignored.
#[derive(Debug, Deserialize)]
struct GdpDocument {
    data: Vec<(String, f64)>,
}

/// Decode and validate `{ "data": [[date, value], ...] }`.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let doc: GdpDocument = serde_json::from_str(json)?;
    Dataset::from_pairs(doc.data.as_slice())
}

pub fn load_dataset_file(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)?;
    let ds = parse_dataset(&body).inspect_err(|e| error!(path = %path.display(), "dataset rejected: {e}"))?;
    info!(path = %path.display(), points = ds.len(), "loaded GDP dataset");
    Ok(ds)
}

/// Fetches the dataset with a single GET; no retries.
pub struct DataLoader {
    http_client: HttpClient,
    url: String,
}

impl Default for DataLoader {
    fn default() -> Self { Self::new() }
}

impl DataLoader {
    pub fn new() -> Self {
        Self::with_url(DATA_URL)
    }

    /// Loader for another source (mirrors, tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { http_client: HttpClient::new(), url: url.into() }
    }

    pub fn url(&self) -> &str { &self.url }

    pub async fn fetch(&self) -> Result<Dataset> {
        let url = self.url.as_str();
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| {
                warn!(url, "request failed: {source}");
                ChartError::Http { url: url.to_string(), source }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "unexpected HTTP status");
            return Err(ChartError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ChartError::Http { url: url.to_string(), source })?;
        let ds = parse_dataset(&body).inspect_err(|e| error!(url, "dataset rejected: {e}"))?;
        info!(url, points = ds.len(), "loaded GDP dataset");
        Ok(ds)
    }
}

/// Convenience for a one-off fetch from `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    DataLoader::with_url(url).fetch().await
}
