// File: crates/chart-core/tests/scales.rs
// Purpose: Scale bounds over a full dataset and bar proportions.

use gdp_chart_core::{load_dataset_file, Chart, Dataset, RenderOptions, ScaleTransform};

#[test]
fn scales_stay_within_plot_bounds() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gdp-sample.json");
    let ds = load_dataset_file(path).expect("fixture loads");
    let layout = Chart::new(ds.clone()).layout(&RenderOptions::default());
    let (w, h) = (layout.plot.width, layout.plot.height);
    assert_eq!((w, h), (710.0, 310.0));

    for p in &ds {
        let x = layout.x_scale.to_px(p.date());
        let y = layout.y_scale.to_px(p.value());
        assert!((0.0..=w).contains(&x), "x {x} out of [0, {w}]");
        assert!((0.0..=h).contains(&y), "y {y} out of [0, {h}]");
    }
    for t in layout.x_axis.ticks.iter().chain(&layout.y_axis.ticks) {
        assert!(t.offset >= 0.0 && t.offset <= w.max(h));
    }
}

#[test]
fn two_points_one_year_apart() {
    let ds = Dataset::from_pairs(&[("1950-01-01", 100.0), ("1951-01-01", 200.0)]).unwrap();
    let layout = Chart::new(ds).layout(&RenderOptions::default());
    let (a, b) = (&layout.bars[0].rect, &layout.bars[1].rect);

    assert_eq!(a.width, b.width);
    assert_eq!(a.width, 355.0);
    assert!(b.height > a.height);
    assert_eq!(b.height, 310.0);
    assert_eq!(a.height, 155.0);
    assert_eq!((a.x, b.x), (0.0, 710.0));
}

#[test]
fn single_point_uses_midpoint() {
    let ds = Dataset::from_pairs(&[("1950-01-01", 0.0)]).unwrap();
    let layout = Chart::new(ds).layout(&RenderOptions::default());
    let bar = &layout.bars[0];
    assert_eq!(bar.rect.x, 355.0);
    assert_eq!(bar.rect.y, 155.0);
    assert_eq!(bar.rect.width, 710.0);
}
