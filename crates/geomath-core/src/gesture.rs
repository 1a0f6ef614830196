use tracing::debug;

use crate::config::ControlsConfig;
use crate::layout::{hit_test, Point, Rect};
use crate::tool::Tool;
use crate::view::ViewModel;

/// Pointer buttons the overlay reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: move the window or a tool.
    Primary,
    /// Right button: rotate.
    Secondary,
}

/// Pointer position in both coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
    /// Relative to the window's content origin.
    pub local: Point,
    /// Relative to the screen.
    pub global: Point,
}

/// In-progress pointer gesture. Anchors only exist while a button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Single-tool mode: the window follows the pointer.
    DraggingWindow {
        /// Pointer minus window origin, in screen pixels.
        offset: Point,
    },
    /// Combined mode: one tool follows the pointer inside the window.
    DraggingTool {
        tool: Tool,
        /// Pointer minus tool placement, in window pixels.
        offset: Point,
    },
    /// Horizontal pointer motion turns `tool`.
    Rotating {
        tool: Tool,
        /// Last pointer position seen, in screen pixels.
        last: Point,
    },
}

/// What a pointer move changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionEffect {
    None,
    /// The window should move to this screen position.
    MoveWindow(Point),
    ToolMoved(Tool),
    ToolRotated(Tool),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Button that started the current gesture.
    pub fn button(&self) -> Option<PointerButton> {
        match self {
            Gesture::Idle => None,
            Gesture::DraggingWindow { .. } | Gesture::DraggingTool { .. } => {
                Some(PointerButton::Primary)
            }
            Gesture::Rotating { .. } => Some(PointerButton::Secondary),
        }
    }

    /// Start a gesture. `hits` lists the shown tools with their on-window
    /// rectangles, in hit-test order. Presses during a gesture are ignored.
    pub fn press(
        &mut self,
        view: &mut ViewModel,
        button: PointerButton,
        pos: PointerPos,
        hits: &[(Tool, Rect)],
    ) {
        if !self.is_idle() {
            return;
        }

        let combined = view.mode().is_combined();
        let next = match (button, combined) {
            (PointerButton::Primary, false) => Gesture::DraggingWindow {
                offset: pos.global - view.window_position,
            },
            (PointerButton::Primary, true) => {
                let hit = hit_test(hits, pos.local);
                view.set_active(hit);
                match hit {
                    Some(tool) => Gesture::DraggingTool {
                        tool,
                        offset: pos.local - view.state(tool).placement,
                    },
                    None => Gesture::Idle,
                }
            }
            (PointerButton::Secondary, false) => match view.action_target() {
                Some(tool) => Gesture::Rotating {
                    tool,
                    last: pos.global,
                },
                None => Gesture::Idle,
            },
            (PointerButton::Secondary, true) => match hit_test(hits, pos.local) {
                Some(tool) => Gesture::Rotating {
                    tool,
                    last: pos.global,
                },
                None => Gesture::Idle,
            },
        };

        if next != Gesture::Idle {
            debug!(gesture = ?next, "gesture started");
        }
        *self = next;
    }

    /// Follow the pointer while a button is held.
    pub fn motion(
        &mut self,
        view: &mut ViewModel,
        pos: PointerPos,
        controls: &ControlsConfig,
    ) -> MotionEffect {
        match self {
            Gesture::Idle => MotionEffect::None,
            Gesture::DraggingWindow { offset } => {
                let target = pos.global - *offset;
                if target == view.window_position {
                    return MotionEffect::None;
                }
                view.window_position = target;
                MotionEffect::MoveWindow(target)
            }
            Gesture::DraggingTool { tool, offset } => {
                let placement = pos.local - *offset;
                let state = view.state_mut(*tool);
                if state.placement == placement {
                    return MotionEffect::None;
                }
                state.placement = placement;
                MotionEffect::ToolMoved(*tool)
            }
            Gesture::Rotating { tool, last } => {
                let dx = (pos.global.x - last.x) as f64;
                *last = pos.global;
                if dx == 0.0 {
                    return MotionEffect::None;
                }
                view.state_mut(*tool)
                    .rotate_by(dx * controls.drag_rotation_sensitivity);
                MotionEffect::ToolRotated(*tool)
            }
        }
    }

    /// End the gesture if `button` is the one that started it.
    pub fn release(&mut self, button: PointerButton) {
        if self.button() == Some(button) {
            debug!(gesture = ?self, "gesture ended");
            *self = Gesture::Idle;
        }
    }
}
