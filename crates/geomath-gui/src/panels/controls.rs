use geomath_core::tool::ToolMode;
use geomath_core::view::Action;

use crate::app::GeomathApp;
use crate::panels::helpers::enum_combo;

pub const CONTROLS_WIDTH: f32 = 90.0;
pub const CONTROLS_MIN_HEIGHT: f32 = 250.0;

const BUTTONS: [(&str, Action); 5] = [
    ("+", Action::ZoomIn),
    ("-", Action::ZoomOut),
    ("\u{2190}", Action::RotateLeft),
    ("\u{2192}", Action::RotateRight),
    ("\u{21bb} 90\u{b0}", Action::QuarterTurn),
];

pub fn show(ctx: &egui::Context, app: &mut GeomathApp) {
    egui::SidePanel::right("controls")
        .exact_width(CONTROLS_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_white_alpha(200))
                .inner_margin(6.0)
                .corner_radius(4.0),
        )
        .show(ctx, |ui| {
            let has_target = app.overlay.view().action_target().is_some();
            ui.add_enabled_ui(has_target, |ui| {
                for (label, action) in BUTTONS {
                    let btn = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 28.0));
                    if ui.add(btn).clicked() {
                        app.overlay.apply(action);
                    }
                }
            });

            ui.add_space(8.0);

            let mut mode = app.overlay.mode();
            if enum_combo(ui, "tool_mode", &mut mode, &ToolMode::ALL) {
                app.overlay.set_mode(mode);
            }

            if !has_target {
                ui.add_space(4.0);
                ui.small("Cliquez sur un outil");
            }

            if let Some(ref err) = app.last_error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::RED, err);
            }
        });
}
