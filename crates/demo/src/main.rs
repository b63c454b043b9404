// File: crates/demo/src/main.rs
// Summary: Fetches (or reads) the GDP dataset once and writes chart.html, chart.svg and chart.png.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gdp_chart_core::{theme, Chart, DataLoader, Dataset, LoadState, RenderOptions, DATA_URL};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gdp-chart", version, about = "Render the US GDP bar chart")]
struct Args {
    /// Dataset URL to fetch.
    #[arg(long, env = "GDP_CHART_URL", default_value = DATA_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it.
    #[arg(long, env = "GDP_CHART_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving chart.html, chart.svg and chart.png.
    #[arg(long, env = "GDP_CHART_OUT_DIR", default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset name.
    #[arg(long, env = "GDP_CHART_THEME", default_value = "light")]
    theme: String,

    /// Skip the PNG raster output.
    #[arg(long)]
    no_png: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gdp_chart=info,gdp_chart_core=info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let opts = render_options(&args)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let state = LoadState::from(load(&args).await);
    let html_path = args.out_dir.join("chart.html");
    write_text(&html_path, &state.render_html(&opts))?;

    let dataset = match &state {
        LoadState::Ready(ds) => ds.clone(),
        LoadState::Failed(msg) => {
            error!("{msg}");
            anyhow::bail!("could not load GDP data: {msg} (error page written to {})", html_path.display());
        }
        LoadState::Loading => anyhow::bail!("dataset load did not complete"),
    };

    let chart = Chart::new(dataset);
    write_text(&args.out_dir.join("chart.svg"), &chart.render_to_svg(&opts))?;
    if !args.no_png {
        let png = args.out_dir.join("chart.png");
        chart.render_to_png(&opts, &png).with_context(|| format!("rendering {}", png.display()))?;
    }
    Ok(())
}

async fn load(args: &Args) -> gdp_chart_core::error::Result<Dataset> {
    match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading dataset from file");
            gdp_chart_core::load_dataset_file(path)
        }
        None => {
            info!(url = %args.url, "fetching dataset");
            DataLoader::with_url(args.url.as_str()).fetch().await
        }
    }
}

fn render_options(args: &Args) -> Result<RenderOptions> {
    let theme = theme::find(&args.theme).with_context(|| {
        let names = theme::presets().iter().map(|t| t.name).collect::<Vec<_>>().join(", ");
        format!("unknown theme '{}' (available: {names})", args.theme)
    })?;
    Ok(RenderOptions { theme, ..RenderOptions::default() })
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(())
}
