/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Alpha given to keyed (white) pixels: near-invisible but still hit-testable.
pub const TRANSPARENCY_ALPHA: u8 = 2;

/// Contrast multiplier applied once to every tool bitmap.
pub const DEFAULT_CONTRAST: f32 = 2.0;

/// Brightness multiplier applied once to every tool bitmap.
pub const DEFAULT_BRIGHTNESS: f32 = 1.2;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Multiplier for the zoom-in button and `+` key.
pub const DEFAULT_ZOOM_IN: f64 = 1.1;

/// Multiplier for the zoom-out button and `-` key.
pub const DEFAULT_ZOOM_OUT: f64 = 0.9;

/// Degrees turned by the arrow buttons and arrow keys.
pub const DEFAULT_FINE_ROTATION_DEG: f64 = 1.0;

/// Degrees of rotation per horizontal pixel of right-button drag.
pub const DEFAULT_DRAG_ROTATION_SENSITIVITY: f64 = 0.2;

/// Vertical gap between the two tools of a composite image, in pixels.
pub const DEFAULT_COMPOSITE_SPACING: u32 = 20;

/// Margin added around the combined-mode layout when sizing the window.
pub const DEFAULT_LAYOUT_MARGIN: f32 = 20.0;

/// Lower bound of a tool's scale factor.
pub const MIN_SCALE: f64 = 0.05;

/// Upper bound of a tool's scale factor.
pub const MAX_SCALE: f64 = 20.0;

/// Directory name holding the tool bitmaps, both next to the executable and
/// at the workspace root.
pub const ASSETS_DIR_NAME: &str = "assets";

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "geomathiques.toml";
