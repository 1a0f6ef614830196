use crate::app::GeomathApp;

pub fn show(ctx: &egui::Context, app: &mut GeomathApp) {
    if !app.show_exit_confirm {
        return;
    }

    egui::Window::new("Quitter")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("\u{ca}tes-vous s\u{fb}r de vouloir quitter ?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Oui").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Non").clicked() {
                        app.show_exit_confirm = false;
                    }
                });
            });
        });
}
