mod app;
mod convert;
mod panels;
mod shortcuts;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use geomath_core::assets::{AssetLocator, ToolSet};
use geomath_core::config::OverlayConfig;
use geomath_core::consts::DEFAULT_CONFIG_FILE;
use geomath_core::overlay::Overlay;

#[derive(Parser)]
#[command(name = "geomathiques", about = "On-screen protractor, set square and ruler")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML), defaults to ./geomathiques.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory searched first for rapporteur.png, equerre.png and regle.png
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OverlayConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => OverlayConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("Failed to read {DEFAULT_CONFIG_FILE}"))?,
    };

    let locator = AssetLocator::new(cli.assets.or_else(|| config.assets_dir.clone()));
    let tools = ToolSet::load(&locator, &config.prepare).context("Failed to load tool bitmaps")?;
    let overlay = Overlay::new(tools, config.controls);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Geomathiques")
            .with_inner_size([400.0, 300.0])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Geomathiques",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals {
                panel_fill: egui::Color32::TRANSPARENT,
                ..egui::Visuals::light()
            });
            Ok(Box::new(app::GeomathApp::new(overlay)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
