use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info};

use crate::config::PrepareConfig;
use crate::consts::ASSETS_DIR_NAME;
use crate::error::{GeomathError, Result};
use crate::prepare::prepare_baseline;
use crate::tool::Tool;

/// Ordered list of directories searched for tool bitmaps.
#[derive(Clone, Debug)]
pub struct AssetLocator {
    dirs: Vec<PathBuf>,
}

impl AssetLocator {
    /// Search an explicit directory first (if given), then `assets/` next to
    /// the running executable (packaged layout), then the workspace
    /// `assets/` directory (running from source).
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let mut dirs = Vec::new();
        dirs.extend(explicit);
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
        {
            dirs.push(exe_dir.join(ASSETS_DIR_NAME));
        }
        dirs.push(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join(ASSETS_DIR_NAME),
        );
        Self { dirs }
    }

    /// Search exactly the given directories, in order.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Path of the first existing bitmap for `tool`.
    pub fn resolve(&self, tool: Tool) -> Result<PathBuf> {
        let found = self
            .dirs
            .iter()
            .map(|dir| dir.join(tool.file_name()))
            .find(|path| path.is_file());

        match found {
            Some(path) => {
                debug!(%tool, path = %path.display(), "resolved asset");
                Ok(path)
            }
            None => Err(GeomathError::MissingAsset {
                tool,
                searched: self.dirs.clone(),
            }),
        }
    }
}

/// Decode any supported image file into RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(GeomathError::InvalidDimensions {
            width: rgba.width(),
            height: rgba.height(),
        });
    }
    Ok(rgba)
}

/// Prepared baseline bitmaps of all three tools.
#[derive(Clone, Debug)]
pub struct ToolSet {
    baselines: [RgbaImage; 3],
}

impl ToolSet {
    /// Load and prepare every tool bitmap. Any missing or unreadable file
    /// fails the whole load.
    pub fn load(locator: &AssetLocator, prepare: &PrepareConfig) -> Result<Self> {
        let load_one = |tool: Tool| -> Result<RgbaImage> {
            let path = locator.resolve(tool)?;
            let raw = load_rgba(&path)?;
            info!(%tool, width = raw.width(), height = raw.height(), "loaded tool bitmap");
            Ok(prepare_baseline(raw, prepare))
        };

        Ok(Self {
            baselines: [
                load_one(Tool::Protractor)?,
                load_one(Tool::SetSquare)?,
                load_one(Tool::Ruler)?,
            ],
        })
    }

    /// Build from already prepared bitmaps, ordered as [`Tool::ALL`].
    pub fn from_baselines(baselines: [RgbaImage; 3]) -> Self {
        Self { baselines }
    }

    pub fn baseline(&self, tool: Tool) -> &RgbaImage {
        &self.baselines[tool.index()]
    }
}
