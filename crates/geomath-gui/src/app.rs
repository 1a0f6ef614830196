use geomath_core::error::GeomathError;
use geomath_core::layout::Point;
use geomath_core::overlay::Overlay;
use geomath_core::tool::Tool;
use tracing::error;

use crate::convert::{fit_texture_side, rgba_to_color_image};
use crate::panels;
use crate::panels::controls::{CONTROLS_MIN_HEIGHT, CONTROLS_WIDTH};

const EXIT_DIALOG_SIZE: egui::Vec2 = egui::vec2(320.0, 140.0);

/// GPU copy of a rendered tool bitmap and the revision it was made from.
pub struct ToolTexture {
    pub handle: egui::TextureHandle,
    pub revision: u64,
}

pub struct GeomathApp {
    pub overlay: Overlay,
    pub textures: [Option<ToolTexture>; 3],
    pub show_exit_confirm: bool,
    pub last_error: Option<String>,
    window_size: Option<egui::Vec2>,
}

impl GeomathApp {
    pub fn new(overlay: Overlay) -> Self {
        Self {
            overlay,
            textures: Default::default(),
            show_exit_confirm: false,
            last_error: None,
            window_size: None,
        }
    }

    pub fn report(&mut self, err: &GeomathError) {
        error!("{err}");
        self.last_error = Some(err.to_string());
    }

    /// Texture of a tool's current bitmap, re-uploaded when its revision
    /// moved since the last upload.
    pub fn texture(&mut self, ctx: &egui::Context, tool: Tool) -> Option<egui::TextureId> {
        let idx = tool.index();
        let revision = self.overlay.revision(tool);
        let stale = self.textures[idx]
            .as_ref()
            .map_or(true, |t| t.revision != revision);

        if stale {
            let max_side = ctx.input(|i| i.max_texture_side);
            let image = match self.overlay.rendered(tool) {
                Ok(img) => rgba_to_color_image(&fit_texture_side(img, max_side)),
                Err(e) => {
                    self.report(&e);
                    return None;
                }
            };
            let handle = ctx.load_texture(
                format!("tool-{idx}"),
                image,
                egui::TextureOptions::LINEAR,
            );
            self.textures[idx] = Some(ToolTexture { handle, revision });
        }

        self.textures[idx].as_ref().map(|t| t.handle.id())
    }

    /// Keep rendered bitmaps within what the GPU accepts as one texture.
    pub fn apply_texture_limit(&mut self, ctx: &egui::Context) {
        let max_side = u32::try_from(ctx.input(|i| i.max_texture_side)).ok();
        if self.overlay.max_side() != max_side {
            self.overlay.set_max_side(max_side);
        }
    }

    fn sync_window_position(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.overlay
                .sync_window_position(Point::new(rect.min.x, rect.min.y));
        }
    }

    /// Resize the window to the tools plus the control column.
    fn fit_window(&mut self, ctx: &egui::Context) {
        let (width, height) = match self.overlay.content_size() {
            Ok(size) => size,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        let mut size = egui::vec2(width + CONTROLS_WIDTH, height.max(CONTROLS_MIN_HEIGHT));
        if self.show_exit_confirm {
            size = size.max(EXIT_DIALOG_SIZE);
        }

        if self.window_size != Some(size) {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
            self.window_size = Some(size);
        }
    }
}

impl eframe::App for GeomathApp {
    fn clear_color(&self, _: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_texture_limit(ctx);
        self.sync_window_position(ctx);
        crate::shortcuts::handle(ctx, self);

        panels::controls::show(ctx, self);
        panels::canvas::show(ctx, self);
        panels::exit_dialog::show(ctx, self);

        self.fit_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomath_core::assets::ToolSet;
    use geomath_core::config::ControlsConfig;
    use geomath_core::view::Action;
    use image::{Rgba, RgbaImage};

    const TEXTURE_LIMIT: usize = 256;

    fn app_with_protractor(width: u32, height: u32) -> GeomathApp {
        let baseline = RgbaImage::from_pixel(width, height, Rgba([90, 60, 30, 255]));
        let small = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let tools = ToolSet::from_baselines([baseline, small.clone(), small]);
        GeomathApp::new(Overlay::new(tools, ControlsConfig::default()))
    }

    fn input() -> egui::RawInput {
        egui::RawInput {
            max_texture_side: Some(TEXTURE_LIMIT),
            ..Default::default()
        }
    }

    #[test]
    fn zooming_in_stops_at_the_texture_limit() {
        let ctx = egui::Context::default();
        let mut app = app_with_protractor(60, 60);

        let _ = ctx.run(input(), |ctx| {
            app.apply_texture_limit(ctx);
            for _ in 0..60 {
                app.overlay.apply(Action::ZoomIn);
            }
            assert!(app.texture(ctx, Tool::Protractor).is_some());
        });

        let img = app.overlay.rendered(Tool::Protractor).unwrap();
        assert!(img.width() as usize <= TEXTURE_LIMIT);
        assert!(img.height() as usize <= TEXTURE_LIMIT);
        assert!(app.overlay.apply(Action::ZoomOut));
    }

    #[test]
    fn oversized_baseline_uploads_downscaled() {
        let ctx = egui::Context::default();
        let mut app = app_with_protractor(600, 300);

        let _ = ctx.run(input(), |ctx| {
            app.apply_texture_limit(ctx);
            assert!(app.texture(ctx, Tool::Protractor).is_some());
        });

        let texture = app.textures[Tool::Protractor.index()].as_ref().unwrap();
        assert_eq!(texture.handle.size(), [256, 128]);
    }
}
