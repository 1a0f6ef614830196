use geomath_core::gesture::{MotionEffect, PointerButton, PointerPos};
use geomath_core::layout::Point;

use crate::app::GeomathApp;

const BUTTONS: [(egui::PointerButton, PointerButton); 2] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
];

pub fn show(ctx: &egui::Context, app: &mut GeomathApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            if !app.show_exit_confirm {
                handle_pointer(ctx, ui, &response, app, rect.min);
            }
            draw_tools(ctx, ui, app, rect.min);
        });
}

fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut GeomathApp,
    origin: egui::Pos2,
) {
    let Some(pos) = ui.input(|i| i.pointer.latest_pos()) else {
        return;
    };

    let local = pos - origin;
    let screen_origin = ctx
        .input(|i| i.viewport().inner_rect)
        .map(|r| Point::new(r.min.x, r.min.y))
        .unwrap_or(app.overlay.view().window_position);
    let pointer = PointerPos {
        local: Point::new(local.x, local.y),
        global: screen_origin + Point::new(pos.x, pos.y),
    };

    for (egui_button, button) in BUTTONS {
        if response.hovered() && ui.input(|i| i.pointer.button_pressed(egui_button)) {
            if let Err(e) = app.overlay.pointer_pressed(button, pointer) {
                app.report(&e);
            }
        }
    }

    match app.overlay.pointer_moved(pointer) {
        MotionEffect::MoveWindow(p) => {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(p.x, p.y)));
        }
        MotionEffect::ToolMoved(_) | MotionEffect::ToolRotated(_) => ctx.request_repaint(),
        MotionEffect::None => {}
    }

    for (egui_button, button) in BUTTONS {
        if ui.input(|i| i.pointer.button_released(egui_button)) {
            app.overlay.pointer_released(button);
        }
    }
}

fn draw_tools(ctx: &egui::Context, ui: &egui::Ui, app: &mut GeomathApp, origin: egui::Pos2) {
    let combined = app.overlay.mode().is_combined();
    let active = app.overlay.view().active();

    for &tool in app.overlay.visible_tools() {
        let Some(texture_id) = app.texture(ctx, tool) else {
            continue;
        };
        let tool_rect = match app.overlay.tool_rect(tool) {
            Ok(r) => r,
            Err(e) => {
                app.report(&e);
                continue;
            }
        };

        let img_rect = egui::Rect::from_min_size(
            origin + egui::vec2(tool_rect.min.x, tool_rect.min.y),
            egui::vec2(tool_rect.width, tool_rect.height),
        );
        ui.painter().image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if combined && active == Some(tool) {
            ui.painter().rect_stroke(
                img_rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_rgb(0, 120, 215)),
                egui::epaint::StrokeKind::Outside,
            );
        }
    }
}
