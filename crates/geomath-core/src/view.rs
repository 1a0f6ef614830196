use tracing::{info, warn};

use crate::config::ControlsConfig;
use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::layout::Point;
use crate::tool::{Tool, ToolMode};

/// Transform state of one tool.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Accumulated rotation in degrees, clockwise. Never wrapped.
    pub rotation_deg: f64,
    /// Multiplicative zoom, always within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Top-left corner inside the window (combined mode only).
    pub placement: Point,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            scale: 1.0,
            placement: Point::ZERO,
        }
    }
}

impl ViewState {
    pub fn rotate_by(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotation_deg += degrees;
        }
    }

    /// Multiply the scale by `factor`. Returns `false` when the factor is
    /// rejected or the scale is already pinned at a bound.
    pub fn scale_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "ignoring non-positive scale factor");
            return false;
        }
        let next = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if next == self.scale {
            return false;
        }
        self.scale = next;
        true
    }
}

/// Discrete operations triggered by buttons and keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    QuarterTurn,
    HalfTurn,
}

impl Action {
    /// Apply to one tool's state. Returns `true` if the state changed.
    pub fn apply_to(self, state: &mut ViewState, controls: &ControlsConfig) -> bool {
        match self {
            Action::ZoomIn => state.scale_by(controls.zoom_in_factor),
            Action::ZoomOut => state.scale_by(controls.zoom_out_factor),
            Action::RotateLeft => {
                state.rotate_by(-controls.fine_rotation_deg);
                true
            }
            Action::RotateRight => {
                state.rotate_by(controls.fine_rotation_deg);
                true
            }
            Action::QuarterTurn => {
                state.rotate_by(90.0);
                true
            }
            Action::HalfTurn => {
                state.rotate_by(180.0);
                true
            }
        }
    }
}

/// Which tool is shown and how each one is transformed.
#[derive(Clone, Debug)]
pub struct ViewModel {
    mode: ToolMode,
    /// Tool selected by the last click in combined mode.
    active: Option<Tool>,
    states: [ViewState; 3],
    /// Window origin in screen coordinates.
    pub window_position: Point,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(ToolMode::default())
    }
}

impl ViewModel {
    pub fn new(mode: ToolMode) -> Self {
        let mut states: [ViewState; 3] = Default::default();
        states[Tool::SetSquare.index()].placement = Point::new(50.0, 50.0);
        states[Tool::Ruler.index()].placement = Point::new(300.0, 150.0);
        Self {
            mode,
            active: None,
            states,
            window_position: Point::ZERO,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Switch mode. Every tool keeps its own rotation, scale and placement.
    pub fn set_mode(&mut self, mode: ToolMode) {
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "switching tool mode");
        }
        self.mode = mode;
        self.active = None;
    }

    pub fn active(&self) -> Option<Tool> {
        self.active
    }

    /// Select a tool in combined mode. Tools not shown are ignored.
    pub fn set_active(&mut self, tool: Option<Tool>) {
        self.active = tool.filter(|t| self.mode.tools().contains(t));
    }

    pub fn state(&self, tool: Tool) -> &ViewState {
        &self.states[tool.index()]
    }

    pub fn state_mut(&mut self, tool: Tool) -> &mut ViewState {
        &mut self.states[tool.index()]
    }

    /// Tools a button or shortcut acts on: the shown tool in single mode,
    /// the active tool (if any) in combined mode.
    pub fn action_target(&self) -> Option<Tool> {
        match self.mode {
            ToolMode::Single(tool) => Some(tool),
            ToolMode::SquareAndRuler => self.active,
        }
    }

    /// Apply an action to the current target. Returns the tool whose state
    /// changed, if any.
    pub fn apply(&mut self, action: Action, controls: &ControlsConfig) -> Option<Tool> {
        let tool = self.action_target()?;
        action
            .apply_to(self.state_mut(tool), controls)
            .then_some(tool)
    }
}
