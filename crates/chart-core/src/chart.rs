// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, layout pass (scales, axes, bars) and headless PNG rendering via Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{Axis, Orientation};
use crate::bars::{layout_bars, Bar};
use crate::dataset::Dataset;
use crate::geometry::PlotArea;
use crate::scale::{TimeScale, ValueScale};
use crate::text::{Anchor, TextShaper};
use crate::types::{Insets, DEFAULT_TICK_COUNT, HEIGHT, TITLE, WIDTH};
use crate::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    pub tick_count: usize,
    /// Draw tick labels in raster output; off keeps PNGs independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            title: TITLE.to_string(),
            tick_count: DEFAULT_TICK_COUNT,
            draw_labels: true,
        }
    }
}

/// Everything positioned in plot coordinates (origin at the plot's top-left).
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    /// Bar under a point given in plot coordinates.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<&Bar> {
        self.bars.iter().rev().find(|b| b.rect.contains(px, py))
    }
}

pub struct Chart {
    pub dataset: Dataset,
}

impl Chart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn layout(&self, opts: &RenderOptions) -> ChartLayout {
        let plot = PlotArea::new(opts.width, opts.height, &opts.insets);
        let (start, end) = self.dataset.date_extent();
        let x_scale = TimeScale::new(start, end, 0.0, plot.width);
        let y_scale = ValueScale::zero_based(self.dataset.max_value(), plot.height);
        let x_axis = Axis::bottom("x-axis", &x_scale, opts.tick_count, plot.height);
        let y_axis = Axis::left("y-axis", &y_scale, opts.tick_count);
        let bars = layout_bars(&self.dataset, &x_scale, &y_scale, plot.width, plot.height);
        debug!(
            bars = bars.len(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            plot_w = plot.width,
            plot_h = plot.height,
            "chart layout"
        );
        ChartLayout { plot, x_scale, y_scale, x_axis, y_axis, bars }
    }

    pub fn render_to_svg(&self, opts: &RenderOptions) -> String {
        crate::svg::render_svg(&self.layout(opts), opts, false)
    }

    pub fn render_to_html(&self, opts: &RenderOptions) -> String {
        crate::html::render_page(&self.layout(opts), opts)
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let layout = self.layout(opts);
        let mut surface = skia::surfaces::raster_n32_premul((opts.width as i32, opts.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        canvas.save();
        canvas.translate((layout.plot.left as f32, layout.plot.top as f32));
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        draw_axis(canvas, &layout.x_axis, &opts.theme, shaper.as_ref());
        draw_axis(canvas, &layout.y_axis, &opts.theme, shaper.as_ref());
        draw_bars(canvas, &layout.bars, &opts.theme);
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    let k = crate::axis::TICK_SIZE as f32;
    let gap = axis.label_distance() as f32;
    let font_size = 10.0;

    // Domain line with outer caps
    match axis.orientation {
        Orientation::Bottom => {
            canvas.draw_line((tx + r0, ty), (tx + r1, ty), &paint);
            canvas.draw_line((tx + r0, ty), (tx + r0, ty + k), &paint);
            canvas.draw_line((tx + r1, ty), (tx + r1, ty + k), &paint);
        }
        Orientation::Left => {
            canvas.draw_line((tx, ty + r0), (tx, ty + r1), &paint);
            canvas.draw_line((tx - k, ty + r0), (tx, ty + r0), &paint);
            canvas.draw_line((tx - k, ty + r1), (tx, ty + r1), &paint);
        }
    }

    for tick in &axis.ticks {
        let o = tick.offset as f32;
        match axis.orientation {
            Orientation::Bottom => {
                canvas.draw_line((tx + o, ty), (tx + o, ty + k), &paint);
                if let Some(s) = shaper {
                    s.draw(canvas, &tick.label, tx + o, ty + gap, font_size, theme.axis_label, Anchor::Middle);
                }
            }
            Orientation::Left => {
                canvas.draw_line((tx - k, ty + o), (tx, ty + o), &paint);
                if let Some(s) = shaper {
                    let top = ty + o - font_size * 0.6;
                    s.draw(canvas, &tick.label, tx - gap, top, font_size, theme.axis_label, Anchor::End);
                }
            }
        }
    }
}

fn draw_bars(canvas: &skia::Canvas, bars: &[Bar], theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.bar);

    for bar in bars {
        let r = bar.rect;
        let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
        canvas.draw_rect(rect, &fill);
    }
}
