use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geomath_core::assets::{AssetLocator, ToolSet};
use geomath_core::consts::{MAX_SCALE, MIN_SCALE};
use geomath_core::overlay::Overlay;
use geomath_core::tool::ToolMode;

use super::{assets_dir, load_config};
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Tool to render: rapporteur, equerre, regle or equerre-regle
    #[arg(short, long, default_value = "rapporteur", value_parser = parse_mode)]
    pub mode: ToolMode,

    /// Rotation in degrees, clockwise (applied to every rendered tool)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub rotate: f64,

    /// Scale factor
    #[arg(short, long, default_value = "1.0")]
    pub scale: f64,

    /// Directory searched first for the tool bitmaps
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,
}

fn parse_mode(s: &str) -> std::result::Result<ToolMode, String> {
    ToolMode::from_arg(s).ok_or_else(|| {
        format!("unknown tool '{s}' (expected rapporteur, equerre, regle or equerre-regle)")
    })
}

/// Reject scales the overlay would clamp, so the output matches the request.
fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
        anyhow::bail!("Scale must be between {MIN_SCALE} and {MAX_SCALE}, got {scale}");
    }
    Ok(())
}

pub fn run(args: &RenderArgs) -> Result<()> {
    check_scale(args.scale)?;

    let config = load_config(args.config.as_deref())?;
    let locator = AssetLocator::new(assets_dir(args.assets.as_ref(), &config));
    let tools = ToolSet::load(&locator, &config.prepare).context("Failed to load tool bitmaps")?;

    let mut overlay = Overlay::new(tools, config.controls.clone());
    overlay.set_mode(args.mode);
    for &tool in args.mode.tools() {
        overlay.set_transform(tool, args.rotate, args.scale);
    }

    let image = overlay.composite()?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_render_summary(args.mode, args.rotate, args.scale, image.dimensions(), &args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomath_core::tool::Tool;

    #[test]
    fn parse_mode_accepts_short_names() {
        assert_eq!(parse_mode("regle"), Ok(ToolMode::Single(Tool::Ruler)));
        assert_eq!(parse_mode("equerre-regle"), Ok(ToolMode::SquareAndRuler));
        assert!(parse_mode("compas").is_err());
    }

    #[test]
    fn check_scale_rejects_values_that_would_be_clamped() {
        assert!(check_scale(1.0).is_ok());
        assert!(check_scale(MIN_SCALE).is_ok());
        assert!(check_scale(MAX_SCALE).is_ok());
        assert!(check_scale(50.0).is_err());
        assert!(check_scale(0.01).is_err());
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(f64::NAN).is_err());
    }
}
