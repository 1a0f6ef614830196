use image::imageops;
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Stack two bitmaps vertically on a fully transparent canvas.
///
/// The canvas is as wide as the wider image and `spacing` pixels taller than
/// both heights together. Pixels are copied as-is, without blending.
pub fn stack_vertical(top: &RgbaImage, bottom: &RgbaImage, spacing: u32) -> RgbaImage {
    let width = top.width().max(bottom.width());
    let height = top.height() + spacing + bottom.height();

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0]));
    imageops::replace(&mut canvas, top, 0, 0);
    imageops::replace(&mut canvas, bottom, 0, (top.height() + spacing) as i64);

    debug!(width, height, spacing, "built composite bitmap");
    canvas
}
