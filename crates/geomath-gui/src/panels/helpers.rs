/// Show a ComboBox for enum selection. Returns `true` if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    id: &str,
    current: &mut T,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}
