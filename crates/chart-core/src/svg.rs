// File: crates/chart-core/src/svg.rs
// Summary: SVG markup for a laid-out chart: plot group, both axes and one rect per bar.

use std::fmt::Write as _;

use crate::axis::{Axis, Orientation, TICK_SIZE};
use crate::chart::{ChartLayout, RenderOptions};
use crate::theme::css;
use crate::tooltip::tooltip_html;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the `<svg>` element. With `interactive`, each bar also carries its
/// precomputed tooltip markup in `data-tooltip` for the page script.
pub fn render_svg(layout: &ChartLayout, opts: &RenderOptions, interactive: bool) -> String {
    let theme = &opts.theme;
    let mut out = String::with_capacity(256 + layout.bars.len() * 160);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg id="chart" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background: {}">"#,
        opts.width,
        opts.height,
        css(theme.background)
    );
    let _ = writeln!(out, r#"<g transform="translate({},{})">"#, layout.plot.left, layout.plot.top);
    write_axis(&mut out, &layout.x_axis, &css(theme.axis_line), &css(theme.axis_label));
    write_axis(&mut out, &layout.y_axis, &css(theme.axis_line), &css(theme.axis_label));

    let fill = css(theme.bar);
    for bar in &layout.bars {
        let r = bar.rect;
        let _ = write!(
            out,
            r#"<rect class="bar" data-date="{}" data-gdp="{}" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            escape(bar.data_date()),
            bar.data_gdp(),
            r.x,
            r.y,
            r.width,
            r.height,
            fill
        );
        if interactive {
            let _ = write!(out, r#" data-tooltip="{}""#, escape(&tooltip_html(bar.point.date(), bar.point.value())));
        }
        out.push_str("></rect>\n");
    }
    out.push_str("</g>\n</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &Axis, stroke: &str, label: &str) {
    let anchor = match axis.orientation {
        Orientation::Bottom => "middle",
        Orientation::Left => "end",
    };
    let _ = write!(out, r#"<g id="{}""#, axis.id);
    if axis.translate != (0.0, 0.0) {
        let _ = write!(out, r#" transform="translate({},{})""#, axis.translate.0, axis.translate.1);
    }
    let _ = writeln!(
        out,
        r#" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#
    );
    let _ = writeln!(out, r#"<path class="domain" stroke="{stroke}" d="{}"></path>"#, axis.domain_path());

    let gap = axis.label_distance();
    for tick in &axis.ticks {
        let (tx, ty) = axis.tick_translate(tick);
        let text = escape(&tick.label);
        let _ = match axis.orientation {
            Orientation::Bottom => writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate({tx},{ty})"><line stroke="{stroke}" y2="{TICK_SIZE}"></line><text fill="{label}" y="{gap}" dy="0.71em">{text}</text></g>"#
            ),
            Orientation::Left => writeln!(
                out,
                r#"<g class="tick" opacity="1" transform="translate({tx},{ty})"><line stroke="{stroke}" x2="-{TICK_SIZE}"></line><text fill="{label}" x="-{gap}" dy="0.32em">{text}</text></g>"#
            ),
        };
    }
    out.push_str("</g>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<br> & "q""#), "&lt;br&gt; &amp; &quot;q&quot;");
    }
}
