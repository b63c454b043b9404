// File: crates/chart-core/src/text.rs
// Summary: Tick label shaping for the raster renderer, using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchoring of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Middle,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its top edge at `top`, anchored horizontally at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        p.paint(canvas, (left, top));
    }
}
