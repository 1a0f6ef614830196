use geomath_core::composite::stack_vertical;
use geomath_core::consts::DEFAULT_COMPOSITE_SPACING;
use geomath_core::layout::{content_bounds, hit_test, Point, Rect};

mod common;

// ---------------------------------------------------------------------------
// stack_vertical
// ---------------------------------------------------------------------------

#[test]
fn test_composite_dimensions() {
    let square = common::gradient(30, 30);
    let ruler = common::gradient(60, 10);
    let out = stack_vertical(&square, &ruler, DEFAULT_COMPOSITE_SPACING);
    assert_eq!(out.width(), 60);
    assert_eq!(out.height(), 30 + 10 + 20);
}

#[test]
fn test_composite_places_images_and_gap_is_transparent() {
    let top = common::solid(10, 4, [255, 0, 0, 255]);
    let bottom = common::solid(6, 3, [0, 0, 255, 255]);
    let out = stack_vertical(&top, &bottom, 5);

    assert_eq!(out.dimensions(), (10, 12));
    assert_eq!(out.get_pixel(9, 3).0, [255, 0, 0, 255]);
    // Gap row
    assert_eq!(out.get_pixel(0, 6).0[3], 0);
    // Bottom image starts at y = 4 + 5
    assert_eq!(out.get_pixel(0, 9).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(5, 11).0, [0, 0, 255, 255]);
    // Right of the narrower bottom image
    assert_eq!(out.get_pixel(8, 10).0[3], 0);
}

#[test]
fn test_composite_zero_spacing() {
    let a = common::gradient(8, 2);
    let b = common::gradient(8, 3);
    let out = stack_vertical(&a, &b, 0);
    assert_eq!(out.dimensions(), (8, 5));
    assert_eq!(out.get_pixel(3, 2), b.get_pixel(3, 0));
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_rect_contains_is_half_open() {
    let r = Rect::from_min_size(Point::new(10.0, 10.0), 5.0, 5.0);
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(14.9, 14.9)));
    assert!(!r.contains(Point::new(15.0, 12.0)));
    assert!(!r.contains(Point::new(9.9, 12.0)));
}

#[test]
fn test_hit_test_prefers_first_match() {
    let a = Rect::from_min_size(Point::new(0.0, 0.0), 10.0, 10.0);
    let b = Rect::from_min_size(Point::new(5.0, 5.0), 10.0, 10.0);
    let items = [("a", a), ("b", b)];
    assert_eq!(hit_test(&items, Point::new(7.0, 7.0)), Some("a"));
    assert_eq!(hit_test(&items, Point::new(12.0, 12.0)), Some("b"));
    assert_eq!(hit_test(&items, Point::new(50.0, 50.0)), None);
}

#[test]
fn test_content_bounds_adds_margin() {
    let rects = [
        Rect::from_min_size(Point::new(50.0, 50.0), 30.0, 30.0),
        Rect::from_min_size(Point::new(300.0, 150.0), 60.0, 10.0),
    ];
    assert_eq!(content_bounds(&rects, 20.0), (380.0, 180.0));
    assert_eq!(content_bounds(&[], 20.0), (20.0, 20.0));
}
