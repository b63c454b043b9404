// File: crates/chart-core/src/bars.rs
// Summary: Bar geometry, one rectangle per data point.

use crate::dataset::{DataPoint, Dataset};
use crate::geometry::Rect;
use crate::scale::{ScaleTransform, TimeScale, ValueScale};

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub point: DataPoint,
    pub rect: Rect,
}

impl Bar {
    /// `data-date` attribute: the source date string, unchanged.
    pub fn data_date(&self) -> &str { self.point.raw_date() }

    /// `data-gdp` attribute: the value in its shortest decimal form.
    pub fn data_gdp(&self) -> String { self.point.value().to_string() }
}

/// Every bar shares the width `plot_width / len`; `x` is the point's date
/// and the bar spans from its value down to the baseline.
pub fn layout_bars(dataset: &Dataset, x: &TimeScale, y: &ValueScale, plot_width: f64, plot_height: f64) -> Vec<Bar> {
    let width = plot_width / dataset.len() as f64;
    dataset
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let top = y.to_px(p.value());
            Bar {
                index,
                point: p.clone(),
                rect: Rect::from_xywh(x.to_px(p.date()), top, width, plot_height - top),
            }
        })
        .collect()
}
