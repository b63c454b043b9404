// File: crates/chart-dioxus/src/controller.rs
// Summary: Component-local state for GdpChart: one-shot load result, cached layout and tooltip.

use gdp_chart_core::{Chart, ChartError, ChartLayout, Dataset, LoadState, RenderOptions, Tooltip};
use tracing::{debug, warn};

/// Everything the component owns for its lifetime. Populated once by the
/// load task; afterwards only hover events mutate it.
#[derive(Clone, Debug, Default)]
pub struct ChartController {
    pub load: LoadState,
    pub layout: Option<ChartLayout>,
    pub tooltip: Tooltip,
}

impl ChartController {
    /// Apply the load result. Later calls are ignored; the component never refetches.
    pub fn on_loaded(&mut self, result: Result<Dataset, ChartError>, opts: &RenderOptions) {
        if !matches!(self.load, LoadState::Loading) {
            debug!("ignoring repeated load result");
            return;
        }
        if let Err(e) = &result {
            warn!("GDP chart load failed: {e}");
        }
        self.load = LoadState::from(result);
        self.layout = self.load.dataset().map(|ds| Chart::new(ds.clone()).layout(opts));
    }

    /// Hover-enter on bar `index` with the pointer at page coordinates.
    pub fn hover_enter(&mut self, index: usize, page: (f64, f64)) {
        if let Some(bar) = self.layout.as_ref().and_then(|l| l.bars.get(index)) {
            self.tooltip.on_enter(&bar.point, page);
        }
    }

    pub fn hover_leave(&mut self) {
        self.tooltip.on_leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_pairs(&[("1950-01-01", 243.1), ("1950-04-01", 250.0)]).unwrap()
    }

    #[test]
    fn load_populates_layout_once() {
        let opts = RenderOptions::default();
        let mut c = ChartController::default();
        assert_eq!(c.load, LoadState::Loading);

        c.on_loaded(Ok(dataset()), &opts);
        assert!(c.load.is_ready());
        assert_eq!(c.layout.as_ref().map(|l| l.bars.len()), Some(2));

        c.on_loaded(Err(ChartError::EmptyDataset), &opts);
        assert!(c.load.is_ready(), "second result must not overwrite the first");
    }

    #[test]
    fn failure_is_kept_as_visible_state() {
        let mut c = ChartController::default();
        c.on_loaded(Err(ChartError::EmptyDataset), &RenderOptions::default());
        assert_eq!(c.load.error(), Some("dataset contains no data points"));
        assert!(c.layout.is_none());
        c.hover_enter(0, (0.0, 0.0));
        assert!(!c.tooltip.is_visible());
    }

    #[test]
    fn hover_round_trip() {
        let mut c = ChartController::default();
        c.on_loaded(Ok(dataset()), &RenderOptions::default());

        c.hover_enter(1, (300.0, 200.0));
        assert_eq!(c.tooltip.html().as_deref(), Some("1950 Q2<br>$250 Billion"));
        assert_eq!(c.tooltip.position(), Some((310.0, 172.0)));
        assert_eq!(c.tooltip.data_date(), Some("1950-04-01"));

        c.hover_leave();
        assert_eq!(c.tooltip.opacity(), 0.0);
    }
}
