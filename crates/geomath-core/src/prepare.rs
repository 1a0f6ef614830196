use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::config::PrepareConfig;
use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD};

/// Run the one-time preparation on a freshly loaded tool bitmap:
/// transparency key, then contrast, then brightness.
///
/// The result is the baseline every later transform starts from.
pub fn prepare_baseline(mut image: RgbaImage, config: &PrepareConfig) -> RgbaImage {
    prepare_in_place(&mut image, config);
    image
}

/// Same steps as [`prepare_baseline`], in place. Returns how many pixels the
/// transparency key caught.
pub fn prepare_in_place(image: &mut RgbaImage, config: &PrepareConfig) -> usize {
    let keyed = apply_transparency_key(image, config.transparency_alpha, config.white_tolerance);
    enhance_contrast(image, config.contrast);
    enhance_brightness(image, config.brightness);
    debug!(
        width = image.width(),
        height = image.height(),
        keyed,
        "prepared baseline bitmap"
    );
    keyed
}

/// True when every colour channel is within `tolerance` of 255.
pub fn is_keyed_white(px: &[u8], tolerance: u8) -> bool {
    let floor = 255 - tolerance;
    px[0] >= floor && px[1] >= floor && px[2] >= floor
}

/// Give white pixels a near-zero alpha. Returns how many pixels were keyed.
///
/// Colour channels are left untouched, as is the alpha of every other pixel.
pub fn apply_transparency_key(image: &mut RgbaImage, alpha: u8, tolerance: u8) -> usize {
    let parallel = pixel_count(image) >= PARALLEL_PIXEL_THRESHOLD;
    let raw: &mut [u8] = image;

    let key = |px: &mut [u8]| -> usize {
        if is_keyed_white(px, tolerance) {
            px[3] = alpha;
            1
        } else {
            0
        }
    };

    if parallel {
        raw.par_chunks_exact_mut(4).map(key).sum()
    } else {
        raw.chunks_exact_mut(4).map(key).sum()
    }
}

/// Mean BT.601 luminance of all pixels, rounded to the nearest integer.
///
/// Alpha is ignored, so keyed pixels still weigh in as white.
pub fn mean_luminance(image: &RgbaImage) -> u8 {
    let n = pixel_count(image);
    if n == 0 {
        return 0;
    }
    let total: u64 = image
        .pixels()
        .map(|p| luminance(p.0[0], p.0[1], p.0[2]) as u64)
        .sum();
    ((total as f64 / n as f64) + 0.5) as u8
}

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = r as f32 * LUMINANCE_R + g as f32 * LUMINANCE_G + b as f32 * LUMINANCE_B;
    l.round().clamp(0.0, 255.0) as u8
}

/// Push colour channels away from the mean grey by `factor`.
///
/// 1.0 leaves the image unchanged; alpha is never touched.
pub fn enhance_contrast(image: &mut RgbaImage, factor: f32) {
    let mean = mean_luminance(image) as f32;
    map_color_channels(image, |v| mean + factor * (v - mean));
}

/// Scale colour channels by `factor`. Alpha is never touched.
pub fn enhance_brightness(image: &mut RgbaImage, factor: f32) {
    map_color_channels(image, |v| factor * v);
}

fn map_color_channels<F>(image: &mut RgbaImage, f: F)
where
    F: Fn(f32) -> f32 + Sync + Send,
{
    let parallel = pixel_count(image) >= PARALLEL_PIXEL_THRESHOLD;
    let raw: &mut [u8] = image;

    let apply = |px: &mut [u8]| {
        for c in px.iter_mut().take(3) {
            *c = f(*c as f32).clamp(0.0, 255.0) as u8;
        }
    };

    if parallel {
        raw.par_chunks_exact_mut(4).for_each(apply);
    } else {
        raw.chunks_exact_mut(4).for_each(apply);
    }
}

fn pixel_count(image: &RgbaImage) -> usize {
    image.width() as usize * image.height() as usize
}
