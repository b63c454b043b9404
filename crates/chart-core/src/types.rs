// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, dataset location).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;

/// Title shown above the chart.
pub const TITLE: &str = "United States GDP";

/// Quarterly US GDP, billions of dollars.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Target tick count handed to both axes.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 20, 20, 70)
    }
}
