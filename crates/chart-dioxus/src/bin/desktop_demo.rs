// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop GdpChart window.

#[cfg(feature = "desktop")]
fn main() {
    tracing_subscriber_init();
    if let Err(e) = gdp_chart_dioxus::ui::run_desktop() {
        eprintln!("gdp-chart-dioxus error: {e}");
    }
}

#[cfg(feature = "desktop")]
fn tracing_subscriber_init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gdp_chart_core=info,gdp_chart_dioxus=info")),
        )
        .init();
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = gdp_chart_dioxus::run_desktop() {
        eprintln!("{e}");
    }
}
