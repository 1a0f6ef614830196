use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{GeomathError, Result};
use crate::view::ViewState;

/// Angles closer than this to a multiple of 90° take the lossless path.
const RIGHT_ANGLE_EPSILON: f64 = 1e-9;

/// Render a tool: rotate the baseline about its centre, then scale the
/// rotated bitmap preserving aspect ratio.
///
/// Always starts from `baseline`, so repeated redraws never compound
/// resampling error.
pub fn render(baseline: &RgbaImage, state: &ViewState) -> Result<RgbaImage> {
    let (w, h) = baseline.dimensions();
    if w == 0 || h == 0 {
        return Err(GeomathError::InvalidDimensions { width: w, height: h });
    }

    let rotated = rotate_about_center(baseline, state.rotation_deg);
    let scaled = scale_image(&rotated, state.scale)?;
    debug!(
        rotation = state.rotation_deg,
        scale = state.scale,
        width = scaled.width(),
        height = scaled.height(),
        "rendered tool bitmap"
    );
    Ok(scaled)
}

/// Rotate clockwise (on screen) by `degrees` about the bitmap centre.
///
/// The canvas grows to the rotated bounding box; uncovered pixels are fully
/// transparent. Multiples of 90° are exact pixel permutations.
pub fn rotate_about_center(src: &RgbaImage, degrees: f64) -> RgbaImage {
    let norm = normalize_degrees(degrees);

    if let Some(quarter) = right_angle_quarters(norm) {
        return match quarter {
            0 => src.clone(),
            1 => imageops::rotate90(src),
            2 => imageops::rotate180(src),
            _ => imageops::rotate270(src),
        };
    }

    let (w, h) = src.dimensions();
    let (out_w, out_h) = rotated_bounds(w, h, norm);
    let theta = norm.to_radians();
    let (sin, cos) = theta.sin_cos();

    let src_cx = w as f64 / 2.0;
    let src_cy = h as f64 / 2.0;
    let out_cx = out_w as f64 / 2.0;
    let out_cy = out_h as f64 / 2.0;

    let mut out = RgbaImage::new(out_w, out_h);
    let row_len = out_w as usize * 4;
    let parallel = out_w as usize * out_h as usize >= PARALLEL_PIXEL_THRESHOLD;

    let fill_row = |(row, line): (usize, &mut [u8])| {
        let dy = row as f64 + 0.5 - out_cy;
        for col in 0..out_w as usize {
            let dx = col as f64 + 0.5 - out_cx;
            // Inverse rotation back into source space
            let sx = dx * cos + dy * sin + src_cx - 0.5;
            let sy = -dx * sin + dy * cos + src_cy - 0.5;
            let px = bilinear_sample(src, sx, sy);
            line[col * 4..col * 4 + 4].copy_from_slice(&px.0);
        }
    };

    let raw: &mut [u8] = &mut out;
    if parallel {
        raw.par_chunks_mut(row_len).enumerate().for_each(fill_row);
    } else {
        raw.chunks_mut(row_len).enumerate().for_each(fill_row);
    }

    out
}

/// Scale by `factor`, preserving aspect ratio, with a smoothing filter.
///
/// Each output dimension is at least one pixel.
pub fn scale_image(src: &RgbaImage, factor: f64) -> Result<RgbaImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(GeomathError::InvalidScale(factor));
    }
    if (factor - 1.0).abs() < RIGHT_ANGLE_EPSILON {
        return Ok(src.clone());
    }

    let (w, h) = src.dimensions();
    let new_w = scaled_dim(w, factor);
    let new_h = scaled_dim(h, factor);
    Ok(imageops::resize(src, new_w, new_h, FilterType::Triangle))
}

/// Size `render` produces for a `width`x`height` baseline, without rendering.
pub fn rendered_size(width: u32, height: u32, state: &ViewState) -> (u32, u32) {
    let (rw, rh) = rotated_bounds(width, height, state.rotation_deg);
    if (state.scale - 1.0).abs() < RIGHT_ANGLE_EPSILON {
        return (rw, rh);
    }
    (scaled_dim(rw, state.scale), scaled_dim(rh, state.scale))
}

fn scaled_dim(len: u32, factor: f64) -> u32 {
    ((len as f64 * factor).round() as u32).max(1)
}

/// Map any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let norm = degrees.rem_euclid(360.0);
    if 360.0 - norm < RIGHT_ANGLE_EPSILON {
        0.0
    } else {
        norm
    }
}

/// Size of the canvas holding a `w`x`h` bitmap rotated by `degrees`.
pub fn rotated_bounds(w: u32, h: u32, degrees: f64) -> (u32, u32) {
    let norm = normalize_degrees(degrees);
    match right_angle_quarters(norm) {
        Some(0) | Some(2) => return (w, h),
        Some(_) => return (h, w),
        None => {}
    }

    let (sin, cos) = norm.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let bw = w as f64 * cos + h as f64 * sin;
    let bh = w as f64 * sin + h as f64 * cos;
    // Trim float noise so an exact fit does not round up a whole pixel
    let out_w = (bw - 1e-6).ceil().max(1.0) as u32;
    let out_h = (bh - 1e-6).ceil().max(1.0) as u32;
    (out_w, out_h)
}

fn right_angle_quarters(norm: f64) -> Option<u8> {
    let quarters = norm / 90.0;
    let nearest = quarters.round();
    if (quarters - nearest).abs() * 90.0 < RIGHT_ANGLE_EPSILON {
        Some((nearest as u32 % 4) as u8)
    } else {
        None
    }
}

/// Bilinear sample in pixel-index space; outside the bitmap is transparent.
///
/// Colour is interpolated premultiplied by alpha so transparent neighbours
/// do not darken edges.
pub fn bilinear_sample(src: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = src.dimensions();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let sample = |c: i64, r: i64| -> [f64; 4] {
        if r >= 0 && r < h as i64 && c >= 0 && c < w as i64 {
            let p = src.get_pixel(c as u32, r as u32).0;
            let a = p[3] as f64 / 255.0;
            [p[0] as f64 * a, p[1] as f64 * a, p[2] as f64 * a, p[3] as f64]
        } else {
            [0.0; 4]
        }
    };

    let v00 = sample(x0, y0);
    let v10 = sample(x1, y0);
    let v01 = sample(x0, y1);
    let v11 = sample(x1, y1);

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut acc = [0.0f64; 4];
    for i in 0..4 {
        acc[i] = v00[i] * w00 + v10[i] * w10 + v01[i] * w01 + v11[i] * w11;
    }

    let alpha = acc[3];
    if alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let unpremul = 255.0 / alpha;
    Rgba([
        (acc[0] * unpremul).round().clamp(0.0, 255.0) as u8,
        (acc[1] * unpremul).round().clamp(0.0, 255.0) as u8,
        (acc[2] * unpremul).round().clamp(0.0, 255.0) as u8,
        alpha.round().clamp(0.0, 255.0) as u8,
    ])
}
