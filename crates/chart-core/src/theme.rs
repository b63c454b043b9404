// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors (SVG/HTML and Skia raster).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub bar: skia::Color,
    pub bar_hover: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
    pub error: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            title: skia::Color::from_argb(255, 20, 20, 30),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            bar: skia::Color::from_argb(255, 70, 130, 180),
            bar_hover: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_background: skia::Color::from_argb(255, 176, 196, 222),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            error: skia::Color::from_argb(255, 200, 60, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            bar: skia::Color::from_argb(255, 64, 160, 255),
            bar_hover: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_background: skia::Color::from_argb(255, 40, 40, 45),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            error: skia::Color::from_argb(255, 220, 80, 80),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),      // base2
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            bar: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),        // blue
            bar_hover: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
            tooltip_background: skia::Color::from_argb(255, 0x07, 0x36, 0x42), // base02
            tooltip_text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            error: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            bar: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            bar_hover: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
            tooltip_background: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            error: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            bar: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            bar_hover: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            error: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// CSS hex notation (`#rrggbb`) for a Skia color; alpha is dropped.
pub fn css(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
