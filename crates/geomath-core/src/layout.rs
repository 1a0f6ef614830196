use std::ops::{Add, Sub};

/// A position in window or screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle, `min` inclusive and `min + size` exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_min_size(min: Point, width: f32, height: f32) -> Self {
        Self { min, width, height }
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.right() && p.y >= self.min.y && p.y < self.bottom()
    }
}

/// First rectangle containing `p`, in the given order.
pub fn hit_test<T: Copy>(items: &[(T, Rect)], p: Point) -> Option<T> {
    items
        .iter()
        .find(|(_, rect)| rect.contains(p))
        .map(|(item, _)| *item)
}

/// Window content size needed to show every rectangle, plus `margin` on the
/// right and bottom.
pub fn content_bounds(rects: &[Rect], margin: f32) -> (f32, f32) {
    let right = rects.iter().map(Rect::right).fold(0.0f32, f32::max);
    let bottom = rects.iter().map(Rect::bottom).fold(0.0f32, f32::max);
    (right + margin, bottom + margin)
}
