use approx::assert_relative_eq;
use geomath_core::config::ControlsConfig;
use geomath_core::gesture::{Gesture, MotionEffect, PointerButton, PointerPos};
use geomath_core::layout::{Point, Rect};
use geomath_core::tool::{Tool, ToolMode};
use geomath_core::view::ViewModel;

fn pos(lx: f32, ly: f32, gx: f32, gy: f32) -> PointerPos {
    PointerPos {
        local: Point::new(lx, ly),
        global: Point::new(gx, gy),
    }
}

fn combined_hits() -> Vec<(Tool, Rect)> {
    vec![
        (Tool::SetSquare, Rect::from_min_size(Point::new(50.0, 50.0), 30.0, 30.0)),
        (Tool::Ruler, Rect::from_min_size(Point::new(300.0, 150.0), 60.0, 10.0)),
    ]
}

// ---------------------------------------------------------------------------
// Single-tool mode
// ---------------------------------------------------------------------------

#[test]
fn test_left_drag_moves_window() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::default();
    vm.window_position = Point::new(100.0, 100.0);
    let mut g = Gesture::Idle;

    g.press(&mut vm, PointerButton::Primary, pos(10.0, 5.0, 110.0, 105.0), &[]);
    assert_eq!(
        g,
        Gesture::DraggingWindow {
            offset: Point::new(10.0, 5.0)
        }
    );

    let effect = g.motion(&mut vm, pos(10.0, 5.0, 150.0, 125.0), &controls);
    assert_eq!(effect, MotionEffect::MoveWindow(Point::new(140.0, 120.0)));
    assert_eq!(vm.window_position, Point::new(140.0, 120.0));

    g.release(PointerButton::Primary);
    assert!(g.is_idle());
}

#[test]
fn test_right_drag_rotates_by_dx_times_sensitivity() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::default();
    let mut g = Gesture::Idle;

    g.press(&mut vm, PointerButton::Secondary, pos(0.0, 0.0, 200.0, 200.0), &[]);
    assert!(matches!(g, Gesture::Rotating { tool: Tool::Protractor, .. }));

    let effect = g.motion(&mut vm, pos(0.0, 0.0, 250.0, 260.0), &controls);
    assert_eq!(effect, MotionEffect::ToolRotated(Tool::Protractor));
    assert_relative_eq!(vm.state(Tool::Protractor).rotation_deg, 10.0, epsilon = 1e-6);

    // Anchor follows the pointer: moving back 25 px undoes half
    g.motion(&mut vm, pos(0.0, 0.0, 225.0, 0.0), &controls);
    assert_relative_eq!(vm.state(Tool::Protractor).rotation_deg, 5.0, epsilon = 1e-6);
}

#[test]
fn test_vertical_motion_does_not_rotate() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::default();
    let mut g = Gesture::Idle;

    g.press(&mut vm, PointerButton::Secondary, pos(0.0, 0.0, 200.0, 200.0), &[]);
    let effect = g.motion(&mut vm, pos(0.0, 0.0, 200.0, 400.0), &controls);
    assert_eq!(effect, MotionEffect::None);
    assert_relative_eq!(vm.state(Tool::Protractor).rotation_deg, 0.0);
}

#[test]
fn test_release_of_other_button_keeps_gesture() {
    let mut vm = ViewModel::default();
    let mut g = Gesture::Idle;

    g.press(&mut vm, PointerButton::Primary, pos(1.0, 1.0, 1.0, 1.0), &[]);
    g.release(PointerButton::Secondary);
    assert!(matches!(g, Gesture::DraggingWindow { .. }));
    g.release(PointerButton::Primary);
    assert_eq!(g, Gesture::Idle);
}

#[test]
fn test_press_during_gesture_is_ignored() {
    let mut vm = ViewModel::default();
    let mut g = Gesture::Idle;

    g.press(&mut vm, PointerButton::Primary, pos(1.0, 1.0, 1.0, 1.0), &[]);
    let before = g;
    g.press(&mut vm, PointerButton::Secondary, pos(5.0, 5.0, 5.0, 5.0), &[]);
    assert_eq!(g, before);
}

#[test]
fn test_idle_motion_has_no_effect() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::default();
    let mut g = Gesture::Idle;
    assert_eq!(
        g.motion(&mut vm, pos(3.0, 3.0, 3.0, 3.0), &controls),
        MotionEffect::None
    );
    assert_eq!(g.button(), None);
}

// ---------------------------------------------------------------------------
// Combined mode
// ---------------------------------------------------------------------------

#[test]
fn test_left_press_on_tool_selects_and_drags_it() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::new(ToolMode::SquareAndRuler);
    let mut g = Gesture::Idle;

    g.press(
        &mut vm,
        PointerButton::Primary,
        pos(60.0, 55.0, 0.0, 0.0),
        &combined_hits(),
    );
    assert_eq!(vm.active(), Some(Tool::SetSquare));
    assert_eq!(
        g,
        Gesture::DraggingTool {
            tool: Tool::SetSquare,
            offset: Point::new(10.0, 5.0)
        }
    );

    let effect = g.motion(&mut vm, pos(110.0, 85.0, 0.0, 0.0), &controls);
    assert_eq!(effect, MotionEffect::ToolMoved(Tool::SetSquare));
    assert_eq!(vm.state(Tool::SetSquare).placement, Point::new(100.0, 80.0));
    // The window itself does not move in combined mode
    assert_eq!(vm.window_position, Point::ZERO);
}

#[test]
fn test_left_press_on_empty_space_clears_active() {
    let mut vm = ViewModel::new(ToolMode::SquareAndRuler);
    vm.set_active(Some(Tool::Ruler));
    let mut g = Gesture::Idle;

    g.press(
        &mut vm,
        PointerButton::Primary,
        pos(5.0, 5.0, 0.0, 0.0),
        &combined_hits(),
    );
    assert_eq!(vm.active(), None);
    assert!(g.is_idle());
}

#[test]
fn test_right_press_rotates_tool_under_pointer_only() {
    let controls = ControlsConfig::default();
    let mut vm = ViewModel::new(ToolMode::SquareAndRuler);
    let mut g = Gesture::Idle;

    g.press(
        &mut vm,
        PointerButton::Secondary,
        pos(310.0, 155.0, 310.0, 155.0),
        &combined_hits(),
    );
    g.motion(&mut vm, pos(320.0, 155.0, 320.0, 155.0), &controls);
    assert_relative_eq!(vm.state(Tool::Ruler).rotation_deg, 2.0, epsilon = 1e-6);
    assert_relative_eq!(vm.state(Tool::SetSquare).rotation_deg, 0.0);
}

#[test]
fn test_right_press_on_empty_space_stays_idle() {
    let mut vm = ViewModel::new(ToolMode::SquareAndRuler);
    let mut g = Gesture::Idle;
    g.press(
        &mut vm,
        PointerButton::Secondary,
        pos(5.0, 5.0, 5.0, 5.0),
        &combined_hits(),
    );
    assert!(g.is_idle());
}
