// File: crates/chart-core/src/axis.rs
// Summary: Axis model: placement, ticks and domain line derived from a scale.

use crate::scale::ScaleTransform;

/// Length of tick marks and of the domain line's end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift so 1px strokes land on device pixels.
pub const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis, relative to the plot origin.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: Orientation,
    /// Scale output range, `(start, end)`.
    pub range: (f64, f64),
    /// Translation of the axis group within the plot area.
    pub translate: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn from_scale<S: ScaleTransform>(
        id: &'static str,
        orientation: Orientation,
        scale: &S,
        tick_count: usize,
        translate: (f64, f64),
    ) -> Self {
        let ticks = scale
            .tick_values(tick_count)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: scale.tick_label(v, tick_count) })
            .collect();
        Self { id, orientation, range: scale.range(), translate, ticks }
    }

    /// Horizontal axis hung below a plot of height `plot_height`.
    pub fn bottom<S: ScaleTransform>(id: &'static str, scale: &S, tick_count: usize, plot_height: f64) -> Self {
        Self::from_scale(id, Orientation::Bottom, scale, tick_count, (0.0, plot_height))
    }

    pub fn left<S: ScaleTransform>(id: &'static str, scale: &S, tick_count: usize) -> Self {
        Self::from_scale(id, Orientation::Left, scale, tick_count, (0.0, 0.0))
    }

    /// SVG path for the domain line with outer end caps.
    pub fn domain_path(&self) -> String {
        let r0 = self.range.0 + CRISP_OFFSET;
        let r1 = self.range.1 + CRISP_OFFSET;
        match self.orientation {
            Orientation::Bottom => format!("M{r0},{TICK_SIZE}V{CRISP_OFFSET}H{r1}V{TICK_SIZE}"),
            Orientation::Left => {
                let k = -TICK_SIZE;
                format!("M{k},{r0}H{CRISP_OFFSET}V{r1}H{k}")
            }
        }
    }

    /// Translation of a single tick group along the axis.
    pub fn tick_translate(&self, tick: &Tick) -> (f64, f64) {
        match self.orientation {
            Orientation::Bottom => (tick.offset + CRISP_OFFSET, 0.0),
            Orientation::Left => (0.0, tick.offset + CRISP_OFFSET),
        }
    }

    pub fn label_distance(&self) -> f64 { TICK_SIZE.max(0.0) + TICK_PADDING }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ValueScale;

    #[test]
    fn left_axis_domain_path() {
        let s = ValueScale::zero_based(200.0, 310.0);
        let axis = Axis::left("y-axis", &s, 10);
        assert_eq!(axis.domain_path(), "M-6,310.5H0.5V0.5H-6");
        assert_eq!(axis.ticks.first().map(|t| t.offset), Some(310.0));
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("200"));
        assert_eq!(axis.label_distance(), 9.0);
    }
}
