use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use geomath_core::assets::{load_rgba, AssetLocator};
use geomath_core::tool::Tool;

use super::{assets_dir, load_config};
use crate::summary::Styles;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory searched first for the tool bitmaps
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let locator = AssetLocator::new(assets_dir(args.assets.as_ref(), &config));
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Search path"));
    for dir in locator.dirs() {
        let marker = if dir.is_dir() { "" } else { "  (missing)" };
        println!("    {}{}", s.path.apply_to(dir.display()), s.label.apply_to(marker));
    }
    println!();
    println!("  {}", s.header.apply_to("Tools"));

    let mut missing = 0;
    for tool in Tool::ALL {
        match locator.resolve(tool) {
            Ok(path) => {
                let size = load_rgba(&path)
                    .map(|img| format!("{}x{}", img.width(), img.height()))
                    .unwrap_or_else(|e| format!("unreadable: {e}"));
                println!(
                    "    {:<12}{}  {}",
                    s.label.apply_to(tool.to_string()),
                    s.value.apply_to(size),
                    s.path.apply_to(path.display())
                );
            }
            Err(_) => {
                missing += 1;
                println!(
                    "    {:<12}{}",
                    s.label.apply_to(tool.to_string()),
                    s.disabled.apply_to(format!("{} not found", tool.file_name()))
                );
            }
        }
    }
    println!();

    if missing > 0 {
        anyhow::bail!("{missing} tool bitmap(s) missing");
    }
    Ok(())
}
