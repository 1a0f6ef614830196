use image::RgbaImage;
use tracing::warn;

use crate::assets::ToolSet;
use crate::composite::stack_vertical;
use crate::config::ControlsConfig;
use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::error::Result;
use crate::gesture::{Gesture, MotionEffect, PointerButton, PointerPos};
use crate::layout::{content_bounds, Point, Rect};
use crate::tool::{Tool, ToolMode};
use crate::transform::{render, rendered_size};
use crate::view::{Action, ViewModel, ViewState};

/// The overlay's whole state: baselines, per-tool transforms, the pointer
/// gesture, and a cache of rendered bitmaps.
///
/// Each tool's bitmap is rendered from its baseline on demand and kept until
/// that tool's transform changes.
pub struct Overlay {
    tools: ToolSet,
    view: ViewModel,
    gesture: Gesture,
    controls: ControlsConfig,
    cache: [Option<RgbaImage>; 3],
    revisions: [u64; 3],
    /// Largest width or height a rendered bitmap may grow to.
    max_side: Option<u32>,
}

impl Overlay {
    pub fn new(tools: ToolSet, controls: ControlsConfig) -> Self {
        Self {
            tools,
            view: ViewModel::default(),
            gesture: Gesture::Idle,
            controls,
            cache: Default::default(),
            revisions: [1; 3],
            max_side: None,
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn controls(&self) -> &ControlsConfig {
        &self.controls
    }

    pub fn mode(&self) -> ToolMode {
        self.view.mode()
    }

    /// Tools shown in the current mode.
    pub fn visible_tools(&self) -> &'static [Tool] {
        self.view.mode().tools()
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.gesture = Gesture::Idle;
        self.view.set_mode(mode);
    }

    /// Limit the rendered size of every tool, e.g. to the display's texture
    /// limit. Zooms and turns that would grow a bitmap past it are refused.
    pub fn set_max_side(&mut self, max_side: Option<u32>) {
        self.max_side = max_side;
    }

    pub fn max_side(&self) -> Option<u32> {
        self.max_side
    }

    /// Apply a button or keyboard action. Returns `true` if anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let Some(target) = self.view.action_target() else {
            return false;
        };
        let before = self.view.state(target).clone();

        match self.view.apply(action, &self.controls) {
            Some(tool) => {
                if !self.within_limit(tool, &before) {
                    warn!(
                        %tool,
                        ?action,
                        max_side = ?self.max_side,
                        "refusing to grow past the size limit"
                    );
                    *self.view.state_mut(tool) = before;
                    return false;
                }
                self.invalidate(tool);
                true
            }
            None => false,
        }
    }

    /// Set a tool's rotation and scale outright. Non-finite values leave the
    /// corresponding field unchanged; the scale is clamped to its bounds.
    pub fn set_transform(&mut self, tool: Tool, rotation_deg: f64, scale: f64) {
        let state = self.view.state_mut(tool);
        if rotation_deg.is_finite() {
            state.rotation_deg = rotation_deg;
        }
        if scale.is_finite() && scale > 0.0 {
            state.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
        self.invalidate(tool);
    }

    /// Change counter of a tool's rendered bitmap, bumped on every
    /// invalidation. Display code re-uploads when it differs from the last
    /// value it saw.
    pub fn revision(&self, tool: Tool) -> u64 {
        self.revisions[tool.index()]
    }

    /// Rendered bitmap of `tool` for its current transform.
    pub fn rendered(&mut self, tool: Tool) -> Result<&RgbaImage> {
        let idx = tool.index();
        let img = match self.cache[idx].take() {
            Some(img) => img,
            None => render(self.tools.baseline(tool), self.view.state(tool))?,
        };
        Ok(&*self.cache[idx].insert(img))
    }

    /// On-window rectangle of a tool. In single-tool mode the tool sits at
    /// the content origin.
    pub fn tool_rect(&mut self, tool: Tool) -> Result<Rect> {
        let origin = if self.view.mode().is_combined() {
            self.view.state(tool).placement
        } else {
            Point::ZERO
        };
        let img = self.rendered(tool)?;
        Ok(Rect::from_min_size(
            origin,
            img.width() as f32,
            img.height() as f32,
        ))
    }

    /// Rectangles of every shown tool, in hit-test order.
    pub fn hit_rects(&mut self) -> Result<Vec<(Tool, Rect)>> {
        let mut rects = Vec::with_capacity(2);
        for &tool in self.visible_tools() {
            rects.push((tool, self.tool_rect(tool)?));
        }
        Ok(rects)
    }

    /// Content size the window needs for the current mode, excluding any
    /// controls drawn beside the tools.
    pub fn content_size(&mut self) -> Result<(f32, f32)> {
        let rects: Vec<Rect> = self.hit_rects()?.into_iter().map(|(_, r)| r).collect();
        if self.view.mode().is_combined() {
            Ok(content_bounds(&rects, self.controls.layout_margin))
        } else {
            Ok(content_bounds(&rects, 0.0))
        }
    }

    /// Flatten the current mode into one bitmap. The combined mode stacks
    /// the set square above the ruler.
    pub fn composite(&mut self) -> Result<RgbaImage> {
        match self.view.mode() {
            ToolMode::Single(tool) => Ok(self.rendered(tool)?.clone()),
            ToolMode::SquareAndRuler => {
                let spacing = self.controls.composite_spacing;
                let square = self.rendered(Tool::SetSquare)?.clone();
                let ruler = self.rendered(Tool::Ruler)?;
                Ok(stack_vertical(&square, ruler, spacing))
            }
        }
    }

    pub fn pointer_pressed(&mut self, button: PointerButton, pos: PointerPos) -> Result<()> {
        let hits = if self.view.mode().is_combined() {
            self.hit_rects()?
        } else {
            Vec::new()
        };
        self.gesture.press(&mut self.view, button, pos, &hits);
        Ok(())
    }

    pub fn pointer_moved(&mut self, pos: PointerPos) -> MotionEffect {
        let before = match self.gesture {
            Gesture::Rotating { tool, .. } => Some(self.view.state(tool).clone()),
            _ => None,
        };

        let effect = self.gesture.motion(&mut self.view, pos, &self.controls);
        if let MotionEffect::ToolRotated(tool) = effect {
            if let Some(before) = before {
                if !self.within_limit(tool, &before) {
                    *self.view.state_mut(tool) = before;
                    return MotionEffect::None;
                }
            }
            self.invalidate(tool);
        }
        effect
    }

    pub fn pointer_released(&mut self, button: PointerButton) {
        self.gesture.release(button);
    }

    /// Record where the window manager put the window. Ignored while the
    /// window is being dragged, since the drag owns the position then.
    pub fn sync_window_position(&mut self, position: Point) {
        if !matches!(self.gesture, Gesture::DraggingWindow { .. }) {
            self.view.window_position = position;
        }
    }

    /// Whether `tool`'s new state fits the size limit. A state that does not
    /// fit is still accepted when it is no larger than `before`, so an
    /// oversized tool can always be shrunk back.
    fn within_limit(&self, tool: Tool, before: &ViewState) -> bool {
        let Some(max_side) = self.max_side else {
            return true;
        };
        let (w, h) = self.tools.baseline(tool).dimensions();
        let (nw, nh) = rendered_size(w, h, self.view.state(tool));
        if nw <= max_side && nh <= max_side {
            return true;
        }
        let (ow, oh) = rendered_size(w, h, before);
        nw.max(nh) <= ow.max(oh)
    }

    fn invalidate(&mut self, tool: Tool) {
        let idx = tool.index();
        self.cache[idx] = None;
        self.revisions[idx] += 1;
    }
}
