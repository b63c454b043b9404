// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus GdpChart component: fetch once, draw the SVG bar chart, drive the hover tooltip.
// Notes:
// - UI deps live behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The state the component mutates is `ChartController`, which is plain Rust
//   and tested without a renderer.

pub mod controller;

pub use controller::ChartController;

#[cfg(feature = "desktop")]
pub mod ui {
    use super::ChartController;
    use dioxus::prelude::*;
    use gdp_chart_core::axis::{Axis, Orientation, TICK_SIZE};
    use gdp_chart_core::theme::css;
    use gdp_chart_core::{fetch_dataset, ChartLayout, LoadState, RenderOptions, DATA_URL};

    #[derive(Props, Clone, PartialEq)]
    pub struct GdpChartProps {
        /// Dataset location; fetched once when the component mounts.
        #[props(default = DATA_URL.to_string())]
        pub url: String,
        #[props(default)]
        pub opts: RenderOptions,
    }

    #[component]
    pub fn GdpChart(props: GdpChartProps) -> Element {
        let opts = props.opts.clone();
        let mut state = use_signal(ChartController::default);

        // Single suspension point: fetch, then populate state exactly once.
        let url = props.url.clone();
        let load_opts = opts.clone();
        use_future(move || {
            let url = url.clone();
            let load_opts = load_opts.clone();
            let mut state = state;
            async move {
                let result = fetch_dataset(&url).await;
                state.write().on_loaded(result, &load_opts);
            }
        });

        let snapshot = state.read().clone();
        let theme = opts.theme;
        let error_color = css(theme.error);
        let body = match (&snapshot.load, &snapshot.layout) {
            (LoadState::Ready(_), Some(layout)) => chart_svg(layout, &opts, state),
            (LoadState::Failed(msg), _) => rsx! {
                div { id: "error", role: "alert", style: "text-align: center; color: {error_color};", "Could not load GDP data: {msg}" }
            },
            _ => rsx! { p { id: "loading", "Loading GDP data…" } },
        };

        let tip = &snapshot.tooltip;
        let tip_style = format!(
            "position: absolute; pointer-events: none; padding: 6px 10px; border-radius: 4px; font-size: 12px; text-align: center; background: {}; color: {}; {}",
            css(theme.tooltip_background),
            css(theme.tooltip_text),
            tip.style()
        );
        let tip_html = tip.html().unwrap_or_default();
        let tip_date = tip.data_date().unwrap_or_default().to_string();
        let page_style = format!(
            "background: {}; color: {}; font-family: sans-serif; padding: 1rem;",
            css(theme.background),
            css(theme.title)
        );
        let title = opts.title.clone();

        rsx! {
            div {
                style: "{page_style}",
                h1 { id: "title", style: "text-align: center;", "{title}" }
                {body}
                div { id: "tooltip", "data-date": "{tip_date}", style: "{tip_style}", dangerous_inner_html: "{tip_html}" }
            }
        }
    }

    fn chart_svg(layout: &ChartLayout, opts: &RenderOptions, state: Signal<ChartController>) -> Element {
        let fill = css(opts.theme.bar);
        let stroke = css(opts.theme.axis_line);
        let label = css(opts.theme.axis_label);

        let bars = layout.bars.iter().map(|bar| {
            let index = bar.index;
            let mut on_enter = state;
            let mut on_leave = state;
            let r = bar.rect;
            let date = bar.data_date().to_string();
            let gdp = bar.data_gdp();
            rsx! {
                rect {
                    key: "{index}",
                    class: "bar",
                    "data-date": "{date}",
                    "data-gdp": "{gdp}",
                    x: "{r.x}",
                    y: "{r.y}",
                    width: "{r.width}",
                    height: "{r.height}",
                    fill: "{fill}",
                    onmouseover: move |evt: MouseEvent| {
                        let p = evt.page_coordinates();
                        on_enter.write().hover_enter(index, (p.x, p.y));
                    },
                    onmouseout: move |_| on_leave.write().hover_leave(),
                }
            }
        });

        rsx! {
            svg {
                id: "chart",
                width: "{opts.width}",
                height: "{opts.height}",
                style: "display: block; margin: 0 auto;",
                g {
                    transform: "translate({layout.plot.left},{layout.plot.top})",
                    {axis_group(&layout.x_axis, &stroke, &label)}
                    {axis_group(&layout.y_axis, &stroke, &label)}
                    {bars}
                }
            }
        }
    }

    fn axis_group(axis: &Axis, stroke: &str, label: &str) -> Element {
        let (tx, ty) = axis.translate;
        let anchor = match axis.orientation {
            Orientation::Bottom => "middle",
            Orientation::Left => "end",
        };
        let gap = axis.label_distance();
        let id = axis.id;
        let domain = axis.domain_path();
        let ticks = axis.ticks.iter().map(|tick| {
            let (x, y) = axis.tick_translate(tick);
            let text = tick.label.clone();
            match axis.orientation {
                Orientation::Bottom => rsx! {
                    g { class: "tick", transform: "translate({x},{y})",
                        line { stroke: "{stroke}", y2: "{TICK_SIZE}" }
                        text { fill: "{label}", y: "{gap}", dy: "0.71em", "{text}" }
                    }
                },
                Orientation::Left => rsx! {
                    g { class: "tick", transform: "translate({x},{y})",
                        line { stroke: "{stroke}", x2: "-{TICK_SIZE}" }
                        text { fill: "{label}", x: "-{gap}", dy: "0.32em", "{text}" }
                    }
                },
            }
        });

        rsx! {
            g {
                id: "{id}",
                transform: "translate({tx},{ty})",
                fill: "none",
                "font-size": "10",
                "font-family": "sans-serif",
                "text-anchor": "{anchor}",
                path { class: "domain", stroke: "{stroke}", d: "{domain}" }
                {ticks}
            }
        }
    }

    /// Open a desktop window hosting the chart.
    pub fn run_desktop() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { GdpChart {} }
        }

        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new()
                .with_title(gdp_chart_core::TITLE)
                .with_inner_size(dioxus_desktop::LogicalSize::new(880.0, 560.0)),
        );
        dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_desktop() -> Result<(), &'static str> {
    Err("gdp-chart-dioxus built without `desktop` feature; enable features to run the UI")
}
