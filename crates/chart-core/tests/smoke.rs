// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing HTML, SVG and PNG outputs.

use gdp_chart_core::{load_dataset_file, Chart, RenderOptions};

fn fixture() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gdp-sample.json")
}

#[test]
fn render_smoke_outputs() {
    let chart = Chart::new(load_dataset_file(fixture()).expect("fixture loads"));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance

    let dir = tempfile::tempdir().expect("tempdir");
    let png = dir.path().join("nested/chart.png");
    chart.render_to_png(&opts, &png).expect("render should succeed");
    let meta = std::fs::metadata(&png).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 400));
    // Top-left corner sits in the margin: background, fully opaque.
    let bg = opts.theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r(), bg.g(), bg.b(), 255]);

    let html = chart.render_to_html(&opts);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<h1 id="title">United States GDP</h1>"#));
    assert!(html.contains(r#"<div id="tooltip" style="opacity: 0;"></div>"#));
    assert!(html.contains("data-tooltip=\"1947 Q1&lt;br&gt;$243.1 Billion\""));
}
