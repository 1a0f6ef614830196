pub mod config;
pub mod info;
pub mod prepare;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geomath_core::config::OverlayConfig;
use geomath_core::consts::DEFAULT_CONFIG_FILE;
use tracing::debug;

/// Load `--config` if given, otherwise `geomathiques.toml` from the working
/// directory when present, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> Result<OverlayConfig> {
    debug!(path = ?path, "loading configuration");
    match path {
        Some(p) => OverlayConfig::load(p)
            .with_context(|| format!("Failed to read config {}", p.display())),
        None => OverlayConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("Failed to read {DEFAULT_CONFIG_FILE}")),
    }
}

/// Assets directory from the command line, falling back to the config file.
pub fn assets_dir(flag: Option<&PathBuf>, config: &OverlayConfig) -> Option<PathBuf> {
    flag.cloned().or_else(|| config.assets_dir.clone())
}
