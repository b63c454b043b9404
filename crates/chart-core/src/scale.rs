// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms mapping data to plot pixels.

use chrono::{Duration, NaiveDate};

use crate::ticks;

/// General scale transform operations for X/Y axes.
pub trait ScaleTransform {
    type Domain: Copy;

    fn to_px(&self, v: Self::Domain) -> f64;
    fn invert(&self, px: f64) -> Self::Domain;
    /// Output pixel range as `(start, end)`; `start` may exceed `end`.
    fn range(&self) -> (f64, f64);
    /// "Nice" reference values inside the domain, roughly `count` of them.
    fn tick_values(&self, count: usize) -> Vec<Self::Domain>;
    fn tick_label(&self, v: Self::Domain, count: usize) -> String;
}

/// Linear interpolation with the degenerate-domain convention: an empty span
/// maps everything to the range midpoint.
#[inline]
fn interpolate(t: Option<f64>, r0: f64, r1: f64) -> f64 {
    r0 + t.unwrap_or(0.5) * (r1 - r0)
}

/// Horizontal scale over calendar dates, linear in elapsed days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub left_px: f64,
    pub right_px: f64,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, left_px: f64, right_px: f64) -> Self {
        Self { start, end, left_px, right_px }
    }

    fn span_days(&self) -> i64 { (self.end - self.start).num_days() }

    fn normalize(&self, d: NaiveDate) -> Option<f64> {
        let span = self.span_days();
        if span == 0 { return None; }
        Some((d - self.start).num_days() as f64 / span as f64)
    }
}

impl ScaleTransform for TimeScale {
    type Domain = NaiveDate;

    #[inline]
    fn to_px(&self, d: NaiveDate) -> f64 {
        interpolate(self.normalize(d), self.left_px, self.right_px)
    }

    /// Pixels outside the range clamp to the nearest domain end.
    fn invert(&self, px: f64) -> NaiveDate {
        let width = self.right_px - self.left_px;
        if width.abs() < f64::EPSILON { return self.start; }
        let t = ((px - self.left_px) / width).clamp(0.0, 1.0);
        let days = (t * self.span_days() as f64).round() as i64;
        self.start.checked_add_signed(Duration::days(days)).unwrap_or(self.end)
    }

    fn range(&self) -> (f64, f64) { (self.left_px, self.right_px) }

    fn tick_values(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = ordered(self.start, self.end);
        ticks::time_ticks(lo, hi, count)
    }

    fn tick_label(&self, d: NaiveDate, _count: usize) -> String {
        ticks::format_time(d)
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub vmin: f64,
    pub vmax: f64,
    pub bottom_px: f64,
    pub top_px: f64,
}

impl ValueScale {
    pub fn new_linear(vmin: f64, vmax: f64, bottom_px: f64, top_px: f64) -> Self {
        Self { vmin, vmax, bottom_px, top_px }
    }

    /// Zero-based scale for bar heights: `[0, vmax]` onto `[height, 0]`.
    pub fn zero_based(vmax: f64, height: f64) -> Self {
        Self::new_linear(0.0, vmax, height, 0.0)
    }

    fn normalize(&self, v: f64) -> Option<f64> {
        let span = self.vmax - self.vmin;
        if span == 0.0 || !span.is_finite() { return None; }
        Some((v - self.vmin) / span)
    }
}

impl ScaleTransform for ValueScale {
    type Domain = f64;

    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        interpolate(self.normalize(v), self.bottom_px, self.top_px)
    }

    fn invert(&self, py: f64) -> f64 {
        let height = self.top_px - self.bottom_px;
        if height.abs() < f64::EPSILON { return self.vmin; }
        self.vmin + (py - self.bottom_px) / height * (self.vmax - self.vmin)
    }

    fn range(&self) -> (f64, f64) { (self.bottom_px, self.top_px) }

    fn tick_values(&self, count: usize) -> Vec<f64> {
        ticks::linear_ticks(self.vmin, self.vmax, count)
    }

    fn tick_label(&self, v: f64, count: usize) -> String {
        let step = ticks::tick_step(self.vmin, self.vmax, count);
        ticks::format_linear(v, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn time_scale_endpoints_and_invert() {
        let s = TimeScale::new(ymd(1950, 1, 1), ymd(1960, 1, 1), 0.0, 710.0);
        assert_eq!(s.to_px(ymd(1950, 1, 1)), 0.0);
        assert_eq!(s.to_px(ymd(1960, 1, 1)), 710.0);
        assert_eq!(s.invert(710.0), ymd(1960, 1, 1));
        assert_eq!(s.invert(s.to_px(ymd(1955, 7, 1))), ymd(1955, 7, 1));
    }

    #[test]
    fn time_invert_clamps_far_pixels() {
        let s = TimeScale::new(ymd(1950, 1, 1), ymd(1960, 1, 1), 0.0, 710.0);
        assert_eq!(s.invert(1.0e9), ymd(1960, 1, 1));
        assert_eq!(s.invert(-1.0e9), ymd(1950, 1, 1));
        assert_eq!(s.invert(f64::INFINITY), ymd(1960, 1, 1));
        assert_eq!(s.invert(f64::NAN), ymd(1950, 1, 1));
    }

    #[test]
    fn value_scale_is_inverted() {
        let s = ValueScale::zero_based(200.0, 310.0);
        assert_eq!(s.to_px(0.0), 310.0);
        assert_eq!(s.to_px(200.0), 0.0);
        assert_eq!(s.to_px(100.0), 155.0);
        assert!((s.invert(155.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domains_map_to_midpoint() {
        let t = TimeScale::new(ymd(1950, 1, 1), ymd(1950, 1, 1), 0.0, 710.0);
        assert_eq!(t.to_px(ymd(1950, 1, 1)), 355.0);
        let v = ValueScale::zero_based(0.0, 310.0);
        assert_eq!(v.to_px(0.0), 155.0);
    }
}
