use std::path::PathBuf;

use thiserror::Error;

use crate::tool::Tool;

#[derive(Error, Debug)]
pub enum GeomathError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Asset for {tool} not found, searched: {}", format_searched(.searched))]
    MissingAsset { tool: Tool, searched: Vec<PathBuf> },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid scale factor: {0}")]
    InvalidScale(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn format_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "(no candidate directories)".into();
    }
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<toml::de::Error> for GeomathError {
    fn from(e: toml::de::Error) -> Self {
        GeomathError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for GeomathError {
    fn from(e: toml::ser::Error) -> Self {
        GeomathError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeomathError>;
