// File: crates/chart-core/tests/render_svg.rs
// Purpose: Structure of the rendered SVG surface: bars, attributes and axis groups.

use gdp_chart_core::{Chart, Dataset, RenderOptions};

fn sample() -> Dataset {
    Dataset::from_pairs(&[
        ("1947-01-01", 243.1),
        ("1947-04-01", 246.3),
        ("1947-07-01", 250.1),
        ("1947-10-01", 260.3),
        ("1948-01-01", 266.2),
    ])
    .expect("valid sample")
}

#[test]
fn one_bar_per_point_with_source_attributes() {
    let ds = sample();
    let svg = Chart::new(ds.clone()).render_to_svg(&RenderOptions::default());

    assert_eq!(svg.matches(r#"<rect class="bar""#).count(), ds.len());
    for p in &ds {
        let attrs = format!(r#"data-date="{}" data-gdp="{}""#, p.raw_date(), p.value());
        assert_eq!(svg.matches(&attrs).count(), 1, "missing or duplicated {attrs}");
    }
    // Plain SVG output carries no page-script attributes.
    assert!(!svg.contains("data-tooltip"));
}

#[test]
fn axis_groups_exist_exactly_once() {
    let svg = Chart::new(sample()).render_to_svg(&RenderOptions::default());
    assert_eq!(svg.matches(r#"id="x-axis""#).count(), 1);
    assert_eq!(svg.matches(r#"id="y-axis""#).count(), 1);
    assert!(svg.contains(r#"<g id="x-axis" transform="translate(0,310)""#));
    assert!(svg.contains(r#"<path class="domain" stroke="#));
    assert!(svg.contains(r#"d="M0.5,6V0.5H710.5V6""#));
    assert!(svg.contains(r#"d="M-6,310.5H0.5V0.5H-6""#));
    assert!(svg.contains(r#"<g transform="translate(70,20)">"#));
}

#[test]
fn layout_attributes_round_trip() {
    let ds = sample();
    let layout = Chart::new(ds.clone()).layout(&RenderOptions::default());
    assert_eq!(layout.bars.len(), ds.len());
    for (bar, p) in layout.bars.iter().zip(ds.iter()) {
        assert_eq!(bar.data_date(), p.raw_date());
        assert_eq!(bar.data_gdp().parse::<f64>().unwrap(), p.value());
        assert_eq!(bar.point, *p);
    }
}

#[test]
fn error_page_is_visible() {
    use gdp_chart_core::{ChartError, LoadState};

    let state = LoadState::from(Err::<Dataset, _>(ChartError::Status {
        url: "https://example.invalid/gdp.json".into(),
        status: 404,
    }));
    assert!(!state.is_ready());
    let html = state.render_html(&RenderOptions::default());
    assert!(html.contains(r#"<div id="error" role="alert">"#));
    assert!(html.contains("HTTP 404"));
    assert!(!html.contains("<svg"));

    let loading = LoadState::default().render_html(&RenderOptions::default());
    assert!(loading.contains(r#"id="loading""#));
}
