// File: crates/chart-core/src/html.rs
// Summary: Standalone HTML pages: the chart with its hover tooltip, plus loading and error states.

use crate::chart::{ChartLayout, RenderOptions};
use crate::svg::{escape, render_svg};
use crate::theme::css;
use crate::tooltip::{POINTER_OFFSET, VISIBLE_OPACITY};

fn head(opts: &RenderOptions) -> String {
    let t = &opts.theme;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ background: {bg}; color: {fg}; font-family: sans-serif; margin: 0; padding: 1rem; }}
#title {{ text-align: center; }}
#chart {{ display: block; margin: 0 auto; }}
.bar:hover {{ fill: {hover}; }}
#tooltip {{ position: absolute; pointer-events: none; padding: 6px 10px; border-radius: 4px; font-size: 12px; text-align: center; background: {tip_bg}; color: {tip_fg}; }}
#error {{ text-align: center; color: {err}; }}
</style>
</head>
<body>
<h1 id="title">{title}</h1>
"#,
        title = escape(&opts.title),
        bg = css(t.background),
        fg = css(t.title),
        hover = css(t.bar_hover),
        tip_bg = css(t.tooltip_background),
        tip_fg = css(t.tooltip_text),
        err = css(t.error),
    )
}

/// Page script: toggles `#tooltip` from each bar's precomputed attributes.
fn hover_script() -> String {
    format!(
        r##"<script>
(function () {{
  var tooltip = document.getElementById("tooltip");
  document.querySelectorAll("#chart .bar").forEach(function (bar) {{
    bar.addEventListener("mouseover", function (event) {{
      tooltip.innerHTML = bar.getAttribute("data-tooltip");
      tooltip.setAttribute("data-date", bar.getAttribute("data-date"));
      tooltip.style.opacity = "{opacity}";
      tooltip.style.left = (event.pageX + {dx}) + "px";
      tooltip.style.top = (event.pageY + {dy}) + "px";
    }});
    bar.addEventListener("mouseout", function () {{
      tooltip.style.opacity = "0";
    }});
  }});
}})();
</script>
"##,
        opacity = VISIBLE_OPACITY,
        dx = POINTER_OFFSET.0,
        dy = POINTER_OFFSET.1,
    )
}

/// Full page: title, chart and a hidden tooltip element.
pub fn render_page(layout: &ChartLayout, opts: &RenderOptions) -> String {
    let mut page = head(opts);
    page.push_str(&render_svg(layout, opts, true));
    page.push_str("<div id=\"tooltip\" style=\"opacity: 0;\"></div>\n");
    page.push_str(&hover_script());
    page.push_str("</body>\n</html>\n");
    page
}

pub fn render_loading_page(opts: &RenderOptions) -> String {
    let mut page = head(opts);
    page.push_str("<p id=\"loading\">Loading GDP data…</p>\n</body>\n</html>\n");
    page
}

/// Page shown when the dataset could not be loaded.
pub fn render_error_page(message: &str, opts: &RenderOptions) -> String {
    let mut page = head(opts);
    page.push_str(&format!(
        "<div id=\"error\" role=\"alert\">Could not load GDP data: {}</div>\n</body>\n</html>\n",
        escape(message)
    ));
    page
}
