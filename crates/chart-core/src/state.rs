// File: crates/chart-core/src/state.rs
// Summary: One-shot load state of the chart component; failure is shown, not swallowed.

use crate::chart::{Chart, RenderOptions};
use crate::dataset::Dataset;
use crate::error::ChartError;
use crate::html;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Dataset),
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool { matches!(self, LoadState::Ready(_)) }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Ready(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn render_html(&self, opts: &RenderOptions) -> String {
        match self {
            LoadState::Loading => html::render_loading_page(opts),
            LoadState::Ready(ds) => Chart::new(ds.clone()).render_to_html(opts),
            LoadState::Failed(msg) => html::render_error_page(msg, opts),
        }
    }
}

impl From<Result<Dataset, ChartError>> for LoadState {
    fn from(r: Result<Dataset, ChartError>) -> Self {
        match r {
            Ok(ds) => LoadState::Ready(ds),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}
