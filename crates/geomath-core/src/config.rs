use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BRIGHTNESS, DEFAULT_COMPOSITE_SPACING, DEFAULT_CONTRAST,
    DEFAULT_DRAG_ROTATION_SENSITIVITY, DEFAULT_FINE_ROTATION_DEG, DEFAULT_LAYOUT_MARGIN,
    DEFAULT_ZOOM_IN, DEFAULT_ZOOM_OUT, TRANSPARENCY_ALPHA,
};
use crate::error::Result;

/// Top-level overlay configuration, read from an optional TOML file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Directory searched first for the tool bitmaps.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    #[serde(default)]
    pub prepare: PrepareConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
}

impl OverlayConfig {
    /// Read a configuration file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Read `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// One-time preparation applied to every tool bitmap after loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    /// Alpha written into keyed white pixels.
    pub transparency_alpha: u8,
    /// How far below 255 a channel may be and still count as white.
    /// 0 keys out pure white only.
    pub white_tolerance: u8,
    /// Contrast multiplier (1.0 = unchanged).
    pub contrast: f32,
    /// Brightness multiplier (1.0 = unchanged).
    pub brightness: f32,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            transparency_alpha: TRANSPARENCY_ALPHA,
            white_tolerance: 0,
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// Step sizes of the buttons, keys and pointer gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub fine_rotation_deg: f64,
    /// Degrees per pixel of horizontal right-button drag.
    pub drag_rotation_sensitivity: f64,
    pub composite_spacing: u32,
    pub layout_margin: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN,
            zoom_out_factor: DEFAULT_ZOOM_OUT,
            fine_rotation_deg: DEFAULT_FINE_ROTATION_DEG,
            drag_rotation_sensitivity: DEFAULT_DRAG_ROTATION_SENSITIVITY,
            composite_spacing: DEFAULT_COMPOSITE_SPACING,
            layout_margin: DEFAULT_LAYOUT_MARGIN,
        }
    }
}
