use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cartoon_core::{
    build_palette, detect_edges, dilate, overlay, quantize_by_region, OverlayMode,
};
use cartoonify::codec;
use cartoonify::models::{FileConfig, Overrides, Params};
use cartoonify::output::OutputDir;

#[derive(Parser)]
#[command(name = "cartoonify")]
#[command(about = "Cartoon-style rendering of photographs via edge overlay and color reduction")]
struct Cli {
    /// Path to the input image
    #[arg(short, long)]
    file: PathBuf,

    /// Threshold for the edge filter
    #[arg(short, long)]
    threshold: Option<u32>,

    /// Edge stroke width
    #[arg(short, long)]
    edge: Option<u32>,

    /// The palette step
    #[arg(short, long)]
    palette: Option<u32>,

    /// The color expand allowed deviation
    #[arg(short, long)]
    deviation: Option<u32>,

    /// Color reduction strategy
    #[arg(short, long, value_enum, default_value = "interval")]
    reduce: Reduce,

    /// Blend edges into the source instead of drawing hard black strokes
    #[arg(long)]
    blend: bool,

    /// Output directory (wiped and recreated)
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Optional YAML config file with pipeline parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Reduce {
    /// Snap every pixel to the nearest entry of a uniform-grid palette
    Interval,
    /// Average the colors of connected similar-color regions
    Segmentation,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cartoonify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let params = Params::resolve(
        &Overrides {
            threshold: cli.threshold,
            edge: cli.edge,
            palette: cli.palette,
            deviation: cli.deviation,
        },
        &file_config,
    );

    let out = OutputDir::prepare(&cli.output_dir)?;

    tracing::info!(path = %cli.file.display(), "processing");
    let image = codec::load_grid(&cli.file)?;

    // Binary edge image, saved before and after thickening.
    let mut edges = detect_edges(&image, params.threshold);
    codec::save_grid(edges.as_grid(), &out.stage_path("edges", &cli.file))?;

    dilate(&mut edges, params.edge_width);
    codec::save_grid(edges.as_grid(), &out.stage_path("zoomed_edges", &cli.file))?;

    let mode = if cli.blend {
        OverlayMode::Blend
    } else {
        OverlayMode::Stroke
    };
    let mut combined = overlay(&edges, &image, mode)?;
    codec::save_grid(&combined, &out.stage_path("combined", &cli.file))?;

    match cli.reduce {
        Reduce::Interval => {
            let palette = build_palette(params.palette_step)?;
            tracing::info!(colors = palette.len(), "built color palette");
            palette.apply(&mut combined);
        }
        Reduce::Segmentation => {
            quantize_by_region(&mut combined, params.deviation);
        }
    }
    tracing::info!(strategy = ?cli.reduce, "applied color reduction");

    let final_path = out.final_path(&cli.file);
    codec::save_grid(&combined, &final_path)?;
    tracing::info!(path = %final_path.display(), "done");

    Ok(())
}
