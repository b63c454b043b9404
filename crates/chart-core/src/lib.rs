// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the GDP bar chart API (load, lay out, render).

pub mod axis;
pub mod bars;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod html;
pub mod loader;
pub mod scale;
pub mod state;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, Orientation, Tick};
pub use bars::Bar;
pub use chart::{Chart, ChartLayout, RenderOptions};
pub use dataset::{DataPoint, Dataset};
pub use error::ChartError;
pub use loader::{fetch_dataset, load_dataset_file, parse_dataset, DataLoader};
pub use scale::{ScaleTransform, TimeScale, ValueScale};
pub use state::LoadState;
pub use theme::Theme;
pub use tooltip::Tooltip;
pub use types::{Insets, DATA_URL, TITLE};
