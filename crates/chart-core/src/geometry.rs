// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Plot area inside the surface: origin offset and inner size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(surface_w: u32, surface_h: u32, insets: &crate::types::Insets) -> Self {
        Self {
            left: insets.left as f64,
            top: insets.top as f64,
            width: surface_w.saturating_sub(insets.hsum()) as f64,
            height: surface_h.saturating_sub(insets.vsum()) as f64,
        }
    }
}
