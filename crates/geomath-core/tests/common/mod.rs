#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};

use geomath_core::assets::ToolSet;

/// Solid bitmap of one colour.
pub fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

/// Opaque bitmap with a distinct colour per pixel, so any permutation of
/// pixels shows up in comparisons.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    })
}

/// A tool-like bitmap: white background with a dark opaque border.
pub fn framed(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            Rgba([20, 20, 20, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

/// Tool set with distinct sizes per tool: protractor 40x20, set square
/// 30x30, ruler 60x10.
pub fn tool_set() -> ToolSet {
    ToolSet::from_baselines([gradient(40, 20), gradient(30, 30), gradient(60, 10)])
}

/// Write the three tool bitmaps under their asset names into `dir`.
pub fn write_assets(dir: &Path) {
    framed(40, 20).save(dir.join("rapporteur.png")).expect("write protractor");
    framed(30, 30).save(dir.join("equerre.png")).expect("write set square");
    framed(60, 10).save(dir.join("regle.png")).expect("write ruler");
}
