// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders the sample dataset to SVG markup.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, fails: the golden file is committed under tests/__snapshots__.

use gdp_chart_core::{load_dataset_file, Chart, RenderOptions};

fn render_svg() -> String {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gdp-sample.json");
    let chart = Chart::new(load_dataset_file(path).expect("fixture loads"));
    chart.render_to_svg(&RenderOptions::default())
}

#[test]
fn golden_sample_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("gdp_sample.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        panic!("missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", snap_path.display());
    }
}
