use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Convert a straight-alpha RGBA bitmap to an egui ColorImage.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}

/// Shrink `img` so neither side exceeds `max_side`, keeping the aspect ratio.
/// Bitmaps that already fit are borrowed unchanged.
pub fn fit_texture_side(img: &RgbaImage, max_side: usize) -> Cow<'_, RgbaImage> {
    let (w, h) = img.dimensions();
    let longest = w.max(h) as usize;
    if longest <= max_side || max_side == 0 {
        return Cow::Borrowed(img);
    }
    let factor = max_side as f64 / longest as f64;
    let nw = ((w as f64 * factor).round() as u32).clamp(1, max_side as u32);
    let nh = ((h as f64 * factor).round() as u32).clamp(1, max_side as u32);
    Cow::Owned(imageops::resize(img, nw, nh, FilterType::Triangle))
}
