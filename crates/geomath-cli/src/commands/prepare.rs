use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geomath_core::assets::load_rgba;
use geomath_core::prepare::prepare_in_place;

use super::load_config;

#[derive(Args)]
pub struct PrepareArgs {
    /// Input image file
    pub file: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the white tolerance (0 = pure white only)
    #[arg(long)]
    pub tolerance: Option<u8>,

    /// Override the contrast multiplier
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Override the brightness multiplier
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Output file path (PNG keeps the alpha channel)
    #[arg(short, long, default_value = "prepared.png")]
    pub output: PathBuf,
}

pub fn run(args: &PrepareArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut prepare = config.prepare;
    if let Some(t) = args.tolerance {
        prepare.white_tolerance = t;
    }
    if let Some(c) = args.contrast {
        prepare.contrast = c;
    }
    if let Some(b) = args.brightness {
        prepare.brightness = b;
    }

    let mut img = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", img.width(), img.height());

    println!(
        "Applying key alpha={}, contrast={}, brightness={}",
        prepare.transparency_alpha, prepare.contrast, prepare.brightness
    );
    let keyed = prepare_in_place(&mut img, &prepare);
    let total = img.width() as u64 * img.height() as u64;
    println!(
        "Keyed {} of {} pixels ({:.1}%)",
        keyed,
        total,
        keyed as f64 * 100.0 / total as f64
    );

    img.save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
